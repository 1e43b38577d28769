/**
 * API Error Types
 *
 * This module defines the error taxonomy of the REST API. Every handler
 * returns `Result<_, ApiError>`, so validation, authentication, ownership and
 * storage failures all leave the server through the same JSON shape.
 *
 * # Error Categories
 *
 * - `BadRequest` - missing or invalid required fields (400)
 * - `Unauthorized` - missing/malformed/invalid/expired token, bad credentials (401)
 * - `Forbidden` - authenticated but not the owner of the resource (403)
 * - `NotFound` - resource id does not exist (404)
 * - `DuplicateKey` - uniqueness violation on register (409)
 * - `Internal` - unexpected storage or runtime failure (500)
 *
 * Storage and runtime errors convert into `Internal` through `From`, which
 * lets handlers use `?` directly on sqlx and bcrypt results.
 */

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::sessions::TokenError;

/// Errors surfaced by the REST API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Uniqueness violation (username or email already taken)
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// Unexpected failure. The message is logged, never sent to the client.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn duplicate(message: impl Into<String>) -> Self {
        Self::DuplicateKey(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::DuplicateKey(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client
    ///
    /// Internal errors are collapsed to a generic message.
    pub fn public_message(&self) -> String {
        match self {
            Self::BadRequest(message)
            | Self::Unauthorized(message)
            | Self::Forbidden(message)
            | Self::NotFound(message)
            | Self::DuplicateKey(message) => message.clone(),
            Self::Internal(_) => "Server error".to_string(),
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        Self::Internal(format!("database error: {err}"))
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        Self::Internal(format!("password hashing error: {err}"))
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Internal(format!("blocking task failed: {err}"))
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(ApiError::bad_request("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::unauthorized("x").status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::forbidden("x").status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::duplicate("x").status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::internal("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_message_is_hidden() {
        let error = ApiError::internal("disk on fire at /var/lib/db");
        assert_eq!(error.public_message(), "Server error");
        assert!(error.to_string().contains("disk on fire"));
    }

    #[test]
    fn test_client_errors_keep_message() {
        let error = ApiError::forbidden("Not authorized to delete this link");
        assert_eq!(error.public_message(), "Not authorized to delete this link");
    }

    #[test]
    fn test_from_sqlx_error_is_internal() {
        let error: ApiError = sqlx::Error::RowNotFound.into();
        match error {
            ApiError::Internal(message) => assert!(message.contains("database error")),
            other => panic!("Expected Internal, got {:?}", other),
        }
    }
}
