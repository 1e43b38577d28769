/**
 * Router Configuration
 *
 * Combines the API routes with the cross-cutting layers into the router the
 * server runs.
 *
 * # Layers (outermost first)
 *
 * 1. `TraceLayer` - one span per request, logs status and latency
 * 2. `CorsLayer::permissive()` - any origin may call the API
 * 3. `CatchPanicLayer` - a panicking handler becomes a JSON 500
 *
 * Unknown paths get a JSON 404 from the fallback handler.
 */

use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::backend::error::ApiError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new());

    router
        .fallback(route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
        .with_state(app_state)
}

async fn route_not_found() -> ApiError {
    ApiError::not_found("Route not found")
}

fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    ApiError::internal(format!("handler panicked: {detail}")).into_response()
}
