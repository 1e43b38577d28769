/**
 * Registration Handler
 *
 * POST /api/auth/register
 *
 * # Process
 *
 * 1. Trim name, username and email; blank values count as absent
 * 2. Require a password plus at least one of username or email
 * 3. Reject a taken username or email with 409
 * 4. Hash the password with bcrypt and insert the user
 * 5. Issue a token and return it with the new profile
 *
 * A concurrent registration that passes the pre-check still gets a 409 from
 * the UNIQUE constraints.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::handlers::non_blank;
use crate::backend::auth::password::hash_password;
use crate::backend::auth::users::{create_user, get_user_by_email, get_user_by_username, NewUser};
use crate::backend::error::{ApiError, ApiResult};
use crate::backend::server::state::AppState;
use crate::shared::{AuthResponse, RegisterRequest};

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - no password, or neither username nor email
/// * `409 Conflict` - username or email already registered
/// * `500 Internal Server Error` - hashing or storage failure
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let Json(request) = payload?;

    let name = non_blank(request.name);
    let username = non_blank(request.username);
    let email = non_blank(request.email);
    let password = request.password.filter(|p| !p.is_empty());

    let password = match password {
        Some(password) if username.is_some() || email.is_some() => password,
        _ => {
            tracing::warn!("Register request without password or identifier");
            return Err(ApiError::bad_request("Provide password and username or email"));
        }
    };

    tracing::info!("Register request: username={:?} email={:?}", username, email);

    let pool = state.db.pool();

    if let Some(username) = &username {
        if get_user_by_username(pool, username).await?.is_some() {
            tracing::warn!("Username already taken: {}", username);
            return Err(ApiError::duplicate("Username already taken"));
        }
    }

    if let Some(email) = &email {
        if get_user_by_email(pool, email).await?.is_some() {
            tracing::warn!("Email already registered: {}", email);
            return Err(ApiError::duplicate("Email already registered"));
        }
    }

    let password_hash = hash_password(&password, state.bcrypt_cost).await?;

    let user = create_user(
        pool,
        NewUser {
            name,
            username,
            email,
            password_hash,
        },
    )
    .await?;

    let token = state.tokens.issue(&user)?;

    tracing::info!("User registered: {}", user.id);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User created".to_string(),
            token,
            user: user.profile(),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::server::database::Database;
    use assert_matches::assert_matches;

    async fn test_state() -> AppState {
        let db = Database::in_memory().await.unwrap();
        db.migrate().await.unwrap();
        AppState::with_secret(db, b"register-test-secret").with_bcrypt_cost(4)
    }

    async fn call(state: &AppState, request: RegisterRequest) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
        register(State(state.clone()), Ok(Json(request))).await
    }

    #[tokio::test]
    async fn test_register_with_username() {
        let state = test_state().await;
        let (status, Json(response)) = call(&state, RegisterRequest::with_username("alice", "pw123"))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(response.message, "User created");
        assert_eq!(response.user.username.as_deref(), Some("alice"));

        let claims = state.tokens.verify(&response.token).unwrap();
        assert_eq!(claims.id, Some(response.user.id.to_string()));
    }

    #[tokio::test]
    async fn test_register_trims_fields() {
        let state = test_state().await;
        let request = RegisterRequest {
            name: Some("  Alice  ".to_string()),
            username: Some(" alice ".to_string()),
            email: Some("   ".to_string()),
            password: Some("pw123".to_string()),
        };

        let (_, Json(response)) = call(&state, request).await.unwrap();
        assert_eq!(response.user.name.as_deref(), Some("Alice"));
        assert_eq!(response.user.username.as_deref(), Some("alice"));
        assert_eq!(response.user.email, None);
    }

    #[tokio::test]
    async fn test_register_requires_password_and_identifier() {
        let state = test_state().await;

        let no_password = RegisterRequest {
            username: Some("alice".to_string()),
            ..Default::default()
        };
        let blank_identifiers = RegisterRequest {
            username: Some("  ".to_string()),
            email: Some("".to_string()),
            password: Some("pw123".to_string()),
            ..Default::default()
        };

        for request in [no_password, blank_identifiers] {
            let result = call(&state, request).await;
            assert_matches!(
                result,
                Err(ApiError::BadRequest(m)) if m == "Provide password and username or email"
            );
        }
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let state = test_state().await;
        call(&state, RegisterRequest::with_username("alice", "pw123")).await.unwrap();

        let result = call(&state, RegisterRequest::with_username("alice", "other")).await;
        assert_matches!(result, Err(ApiError::DuplicateKey(m)) if m == "Username already taken");
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let state = test_state().await;
        call(&state, RegisterRequest::with_email("a@example.com", "pw123")).await.unwrap();

        let result = call(&state, RegisterRequest::with_email("a@example.com", "pw456")).await;
        assert_matches!(result, Err(ApiError::DuplicateKey(m)) if m == "Email already registered");
    }
}
