/**
 * Error Conversion
 *
 * `IntoResponse` for `ApiError`, so handlers can return it directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "message": "Title and url required",
 *   "status": 400
 * }
 * ```
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::ApiError;
use crate::shared::ErrorBody;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            ApiError::Internal(cause) => tracing::error!("Internal error: {}", cause),
            other => tracing::debug!("Request rejected ({}): {}", status.as_u16(), other),
        }

        let body = ErrorBody {
            message: self.public_message(),
            status: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}
