/**
 * User Model and Database Operations
 *
 * This module is the credential store: user records keyed by id, each with
 * an optional unique username and an optional unique email. Records are
 * created on registration and never changed or deleted afterwards.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::error::{ApiError, ApiResult};
use crate::shared::UserProfile;

/// User struct representing a user in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Display name
    pub name: Option<String>,
    /// Username (unique when present)
    pub username: Option<String>,
    /// Email address (unique when present)
    pub email: Option<String>,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Public view without the password hash
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            name: self.name.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            created_at: self.created_at,
        }
    }
}

/// Fields of a user about to be inserted
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password_hash: String,
}

const USER_COLUMNS: &str = "id, name, username, email, password_hash, created_at";

/// Create a new user
///
/// A UNIQUE violation on username or email becomes `ApiError::DuplicateKey`.
pub async fn create_user(pool: &SqlitePool, new_user: NewUser) -> ApiResult<User> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(&format!(
        r#"
        INSERT INTO users (id, name, username, email, password_hash, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING {USER_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(&new_user.name)
    .bind(&new_user.username)
    .bind(&new_user.email)
    .bind(&new_user.password_hash)
    .bind(now)
    .fetch_one(pool)
    .await
    .map_err(|err| duplicate_key(&err).unwrap_or_else(|| err.into()))?;

    Ok(user)
}

fn duplicate_key(err: &sqlx::Error) -> Option<ApiError> {
    let db_err = err.as_database_error()?;
    if !db_err.is_unique_violation() {
        return None;
    }

    if db_err.message().contains("users.email") {
        Some(ApiError::duplicate("Email already registered"))
    } else {
        Some(ApiError::duplicate("Username already taken"))
    }
}

/// Get user by ID
pub async fn get_user_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Get user by username (case-sensitive)
pub async fn get_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE username = ?"))
        .bind(username)
        .fetch_optional(pool)
        .await
}

/// Get user by email
pub async fn get_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE email = ?"))
        .bind(email)
        .fetch_optional(pool)
        .await
}

/// Get the user whose username or email equals `identifier`
///
/// A username match wins over an email match.
pub async fn get_user_by_username_or_email(
    pool: &SqlitePool,
    identifier: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!(
        r#"
        SELECT {USER_COLUMNS}
        FROM users
        WHERE username = ? OR email = ?
        ORDER BY CASE WHEN username = ? THEN 0 ELSE 1 END
        LIMIT 1
        "#
    ))
    .bind(identifier)
    .bind(identifier)
    .bind(identifier)
    .fetch_optional(pool)
    .await
}
