/**
 * API Routes
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/auth/register` - User registration
 * - `POST /api/auth/login` - User login
 * - `GET /api/auth/me` - Get current user (requires authentication)
 *
 * ## Links (all require authentication)
 * - `GET /api/links` - List the caller's links
 * - `POST /api/links` - Save a link
 * - `DELETE /api/links/{id}` - Delete one of the caller's links
 * - `DELETE /api/links`, `DELETE /api/links/` - 400, no id given
 *
 * ## Health
 * - `GET /api/health` - Liveness probe
 */

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::backend::auth::{get_me, login, register};
use crate::backend::links::{create_link, delete_link, delete_link_missing_id, health, list_links};
use crate::backend::server::state::AppState;

/// Add the `/api` routes to `router`
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/health", get(health))
        // Authentication endpoints
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(get_me))
        // Link endpoints
        .route(
            "/api/links",
            get(list_links).post(create_link).delete(delete_link_missing_id),
        )
        .route("/api/links/", delete(delete_link_missing_id))
        .route("/api/links/{id}", delete(delete_link))
}
