/**
 * Link Store
 *
 * Persistence for saved links. Every query that returns more than one link
 * is scoped to an owner, and deletion only removes a row whose owner matches.
 *
 * # Storage Notes
 *
 * - `created_at` is stored as integer microseconds so `ORDER BY` is numeric
 * - `tags` is stored as a JSON array in a TEXT column
 * - ties on `created_at` break on insertion order, newest insert first
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::shared::Link;

/// Maximum number of links returned by a listing
pub const LIST_LIMIT: i64 = 200;

const LINK_COLUMNS: &str = "id, user_id, title, url, notes, tags, visits, created_at";

#[derive(Debug, sqlx::FromRow)]
struct LinkRow {
    id: Uuid,
    user_id: Uuid,
    title: String,
    url: String,
    notes: String,
    tags: String,
    visits: i64,
    created_at: i64,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        let tags = serde_json::from_str(&row.tags).unwrap_or_else(|e| {
            tracing::warn!("Unreadable tags on link {}: {}", row.id, e);
            Vec::new()
        });

        Link {
            id: row.id,
            user: row.user_id,
            title: row.title,
            url: row.url,
            notes: row.notes,
            tags,
            visits: row.visits,
            created_at: DateTime::from_timestamp_micros(row.created_at).unwrap_or_default(),
        }
    }
}

/// Fields of a link about to be inserted
#[derive(Debug, Clone)]
pub struct NewLink {
    pub title: String,
    pub url: String,
    pub notes: String,
    pub tags: Vec<String>,
}

/// Insert a link owned by `owner` and return it as stored
pub async fn create_link(
    pool: &SqlitePool,
    owner: Uuid,
    new_link: NewLink,
) -> Result<Link, sqlx::Error> {
    let id = Uuid::new_v4();
    let created_at = Utc::now().timestamp_micros();
    let tags = serde_json::to_string(&new_link.tags)
        .map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

    let row = sqlx::query_as::<_, LinkRow>(&format!(
        r#"
        INSERT INTO links (id, user_id, title, url, notes, tags, visits, created_at)
        VALUES (?, ?, ?, ?, ?, ?, 0, ?)
        RETURNING {LINK_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(owner)
    .bind(&new_link.title)
    .bind(&new_link.url)
    .bind(&new_link.notes)
    .bind(tags)
    .bind(created_at)
    .fetch_one(pool)
    .await?;

    Ok(row.into())
}

/// Links owned by `owner`, newest first, at most `limit`
pub async fn list_links_for_user(
    pool: &SqlitePool,
    owner: Uuid,
    limit: i64,
) -> Result<Vec<Link>, sqlx::Error> {
    let rows = sqlx::query_as::<_, LinkRow>(&format!(
        r#"
        SELECT {LINK_COLUMNS}
        FROM links
        WHERE user_id = ?
        ORDER BY created_at DESC, rowid DESC
        LIMIT ?
        "#
    ))
    .bind(owner)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Link::from).collect())
}

/// Get link by ID, regardless of owner
pub async fn get_link_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<Link>, sqlx::Error> {
    let row = sqlx::query_as::<_, LinkRow>(&format!("SELECT {LINK_COLUMNS} FROM links WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(Link::from))
}

/// Delete link `id` if it belongs to `owner`
///
/// Returns `false` when no row matched.
pub async fn delete_link(pool: &SqlitePool, id: Uuid, owner: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM links WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(owner)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
