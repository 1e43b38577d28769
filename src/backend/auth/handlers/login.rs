/**
 * Login Handler
 *
 * POST /api/auth/login
 *
 * The identifier is matched against username first, then email. Unknown
 * identifiers and wrong passwords produce the same 401.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::non_blank;
use crate::backend::auth::password::verify_password;
use crate::backend::auth::users::get_user_by_username_or_email;
use crate::backend::error::{ApiError, ApiResult};
use crate::backend::server::state::AppState;
use crate::shared::{AuthResponse, LoginRequest};

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - identifier or password missing
/// * `401 Unauthorized` - no such user, or password mismatch
/// * `500 Internal Server Error` - storage or token failure
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<AuthResponse>> {
    let Json(request) = payload?;

    let identifier = non_blank(request.identifier);
    let password = request.password.filter(|p| !p.is_empty());

    let (Some(identifier), Some(password)) = (identifier, password) else {
        tracing::warn!("Login request without identifier or password");
        return Err(ApiError::bad_request("Provide identifier and password"));
    };

    tracing::info!("Login request for: {}", identifier);

    let user = get_user_by_username_or_email(state.db.pool(), &identifier)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", identifier);
            ApiError::unauthorized("Invalid credentials")
        })?;

    if !verify_password(&password, &user.password_hash).await? {
        tracing::warn!("Invalid password for: {}", identifier);
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let token = state.tokens.issue(&user)?;

    tracing::info!("User logged in: {}", user.id);

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        token,
        user: user.profile(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::handlers::register;
    use crate::backend::server::database::Database;
    use crate::shared::RegisterRequest;
    use assert_matches::assert_matches;

    async fn state_with_alice() -> AppState {
        let db = Database::in_memory().await.unwrap();
        db.migrate().await.unwrap();
        let state = AppState::with_secret(db, b"login-test-secret").with_bcrypt_cost(4);

        let request = RegisterRequest {
            username: Some("alice".to_string()),
            email: Some("alice@example.com".to_string()),
            password: Some("pw123".to_string()),
            ..Default::default()
        };
        register(State(state.clone()), Ok(Json(request))).await.unwrap();
        state
    }

    async fn call(state: &AppState, request: LoginRequest) -> ApiResult<Json<AuthResponse>> {
        login(State(state.clone()), Ok(Json(request))).await
    }

    #[tokio::test]
    async fn test_login_by_username_and_email() {
        let state = state_with_alice().await;

        for identifier in ["alice", "alice@example.com"] {
            let Json(response) = call(&state, LoginRequest::new(identifier, "pw123")).await.unwrap();
            assert_eq!(response.message, "Login successful");
            assert_eq!(response.user.username.as_deref(), Some("alice"));

            let claims = state.tokens.verify(&response.token).unwrap();
            assert_eq!(claims.username.as_deref(), Some("alice"));
        }
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let state = state_with_alice().await;
        let result = call(&state, LoginRequest::new("alice", "nope")).await;
        assert_matches!(result, Err(ApiError::Unauthorized(m)) if m == "Invalid credentials");
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        let state = state_with_alice().await;
        let result = call(&state, LoginRequest::new("mallory", "pw123")).await;
        assert_matches!(result, Err(ApiError::Unauthorized(m)) if m == "Invalid credentials");
    }

    #[tokio::test]
    async fn test_login_missing_fields() {
        let state = state_with_alice().await;
        let requests = [
            LoginRequest::default(),
            LoginRequest {
                identifier: Some("alice".to_string()),
                password: None,
            },
            LoginRequest {
                identifier: Some("   ".to_string()),
                password: Some("pw123".to_string()),
            },
        ];

        for request in requests {
            let result = call(&state, request).await;
            assert_matches!(result, Err(ApiError::BadRequest(m)) if m == "Provide identifier and password");
        }
    }
}
