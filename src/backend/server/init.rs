/**
 * Server Initialization
 *
 * Builds the application from a `ServerConfig`.
 *
 * # Initialization Process
 *
 * 1. Open the database (creating the file if needed)
 * 2. Apply migrations
 * 3. Ping the database
 * 4. Build `AppState` and the router
 *
 * Any failure is returned as a `StartupError`; the binary exits non-zero.
 */

use axum::Router;
use sqlx::migrate::MigrateError;
use thiserror::Error;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{ConfigError, ServerConfig};
use crate::backend::server::database::Database;
use crate::backend::server::state::AppState;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] MigrateError),
}

/// Create and configure the Axum application
///
/// Returns the router together with the database handle so the caller can
/// close the pool after shutdown.
pub async fn create_app(config: &ServerConfig) -> Result<(Router<()>, Database), StartupError> {
    tracing::info!("Initializing LinkCrawler backend server");

    let db = Database::connect(&config.database_url).await?;
    db.migrate().await?;
    db.ping().await?;
    tracing::info!("Database ready");

    if config.uses_default_secret() {
        tracing::warn!("JWT_SECRET is not set; signing tokens with the development default");
    }

    let app = create_router(AppState::new(db.clone(), config));
    tracing::info!("Router configured");

    Ok((app, db))
}
