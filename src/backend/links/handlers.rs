/**
 * Link Handlers
 *
 * HTTP handlers for `/api/links` and `/api/health`. Every link handler takes
 * `AuthUser`, so the owner is always the verified caller and never a value
 * from the request body.
 *
 * # Endpoints
 *
 * - `POST /api/links` - save a link for the caller (201)
 * - `GET /api/links` - caller's links, newest first, at most 200
 * - `DELETE /api/links/{id}` - delete one of the caller's links
 * - `GET /api/health` - liveness probe
 */

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use uuid::Uuid;

use crate::backend::auth::handlers::non_blank;
use crate::backend::error::{ApiError, ApiResult};
use crate::backend::links::db::{self as store, NewLink, LIST_LIMIT};
use crate::backend::middleware::AuthUser;
use crate::backend::server::database::Database;
use crate::shared::{CreateLinkRequest, HealthResponse, Link, LinkCreatedResponse, LinkDeletedResponse};

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Save a link for the caller
///
/// # Errors
///
/// * `400 Bad Request` - unparseable body, or blank title/url
/// * `401 Unauthorized` - see `AuthUser`
pub async fn create_link(
    AuthUser(caller): AuthUser,
    State(db): State<Database>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<LinkCreatedResponse>)> {
    let Json(request) = payload?;
    let tags = request.normalized_tags();

    let (Some(title), Some(url)) = (non_blank(request.title), non_blank(request.url)) else {
        tracing::warn!("Create link without title or url from {}", caller.user_id);
        return Err(ApiError::bad_request("Title and url required"));
    };

    let link = store::create_link(
        db.pool(),
        caller.user_id,
        NewLink {
            title,
            url,
            notes: request.notes.unwrap_or_default(),
            tags,
        },
    )
    .await?;

    tracing::info!("Link {} saved for {}", link.id, caller.user_id);

    Ok((
        StatusCode::CREATED,
        Json(LinkCreatedResponse {
            message: "Link saved".to_string(),
            link,
        }),
    ))
}

pub async fn list_links(
    AuthUser(caller): AuthUser,
    State(db): State<Database>,
) -> ApiResult<Json<Vec<Link>>> {
    let links = store::list_links_for_user(db.pool(), caller.user_id, LIST_LIMIT).await?;
    tracing::debug!("Listed {} links for {}", links.len(), caller.user_id);
    Ok(Json(links))
}

/// Delete one of the caller's links
///
/// An id that is not a UUID cannot name a stored link and is reported as
/// not found.
///
/// # Errors
///
/// * `403 Forbidden` - the link belongs to another user
/// * `404 Not Found` - no link with that id
pub async fn delete_link(
    AuthUser(caller): AuthUser,
    State(db): State<Database>,
    Path(id): Path<String>,
) -> ApiResult<Json<LinkDeletedResponse>> {
    let not_found = || ApiError::not_found("Link not found");

    let id = Uuid::parse_str(&id).map_err(|_| {
        tracing::warn!("Delete with unparseable link id: {}", id);
        not_found()
    })?;

    let link = store::get_link_by_id(db.pool(), id).await?.ok_or_else(not_found)?;

    if link.user != caller.user_id {
        tracing::warn!("User {} tried to delete link {} owned by {}", caller.user_id, id, link.user);
        return Err(ApiError::forbidden("Not authorized to delete this link"));
    }

    if !store::delete_link(db.pool(), id, caller.user_id).await? {
        return Err(not_found());
    }

    tracing::info!("Link {} deleted by {}", id, caller.user_id);

    Ok(Json(LinkDeletedResponse {
        message: "Link deleted".to_string(),
        id,
    }))
}

/// `DELETE /api/links` with no id segment
pub async fn delete_link_missing_id(AuthUser(_): AuthUser) -> ApiError {
    ApiError::bad_request("Missing link id")
}
