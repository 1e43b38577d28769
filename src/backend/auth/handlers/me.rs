/**
 * Get Current User Handler
 *
 * GET /api/auth/me
 *
 * Returns the profile of the user named by the bearer token. A valid token
 * whose user no longer exists yields 404.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::{ApiError, ApiResult};
use crate::backend::middleware::AuthUser;
use crate::backend::server::database::Database;
use crate::shared::UserProfile;

pub async fn get_me(
    AuthUser(caller): AuthUser,
    State(db): State<Database>,
) -> ApiResult<Json<UserProfile>> {
    let user = get_user_by_id(db.pool(), caller.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", caller.user_id);
            ApiError::not_found("User not found")
        })?;

    Ok(Json(user.profile()))
}
