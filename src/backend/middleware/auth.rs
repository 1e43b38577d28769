/**
 * Authentication Middleware
 *
 * Protects routes that require a signed-in caller. `AuthUser` is an axum
 * extractor: listing it as a handler argument runs the checks below before
 * the handler body, and the handler receives the verified identity as a plain
 * value instead of reading it back out of request extensions.
 *
 * # Checks, in order
 *
 * 1. `Authorization` header present, else 401 "No authorization header"
 * 2. Header is exactly `Bearer <token>`, else 401 "Malformed authorization header"
 * 3. Token verifies, else 401 "Invalid or expired token"
 * 4. Claims carry a user id, else 401 "Invalid token payload"
 */

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use uuid::Uuid;

use crate::backend::auth::sessions::TokenService;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Identity of the caller, taken from a verified token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub username: Option<String>,
    pub email: Option<String>,
}

/// Run the bearer-token checks against `headers`
pub fn authenticate(headers: &HeaderMap, tokens: &TokenService) -> Result<AuthContext, ApiError> {
    let header = headers.get(AUTHORIZATION).ok_or_else(|| {
        tracing::warn!("Missing Authorization header");
        ApiError::unauthorized("No authorization header")
    })?;

    let malformed = || {
        tracing::warn!("Invalid Authorization header format");
        ApiError::unauthorized("Malformed authorization header")
    };

    let value = header.to_str().map_err(|_| malformed())?;
    let parts: Vec<&str> = value.split(' ').collect();
    let token = match parts.as_slice() {
        ["Bearer", token] => *token,
        _ => return Err(malformed()),
    };

    let claims = tokens.verify(token).map_err(|e| {
        tracing::warn!("Token verification failed: {}", e);
        ApiError::unauthorized("Invalid or expired token")
    })?;

    let user_id = claims
        .id
        .as_deref()
        .and_then(|id| Uuid::parse_str(id).ok())
        .ok_or_else(|| {
            tracing::warn!("Token has no usable user id");
            ApiError::unauthorized("Invalid token payload")
        })?;

    Ok(AuthContext {
        user_id,
        username: claims.username,
        email: claims.email,
    })
}

/// Axum extractor for the authenticated caller
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthContext);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        authenticate(&parts.headers, &state.tokens).map(AuthUser)
    }
}
