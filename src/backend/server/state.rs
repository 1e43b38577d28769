/**
 * Application State Management
 *
 * `AppState` is the only shared value across requests. It holds the storage
 * handle and the token service; neither carries per-request mutable state.
 * The `FromRef` impls let handlers extract just the part they need.
 *
 * # Example
 *
 * ```rust,ignore
 * use axum::extract::State;
 * use linkcrawler::backend::server::database::Database;
 *
 * async fn handler(State(db): State<Database>) {
 *     db.ping().await.ok();
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::sessions::TokenService;
use crate::backend::server::config::{ServerConfig, DEFAULT_BCRYPT_COST};
use crate::backend::server::database::Database;

#[derive(Clone)]
pub struct AppState {
    /// Storage handle (sqlx pool)
    pub db: Database,

    /// Token issuance and verification
    pub tokens: Arc<TokenService>,

    /// bcrypt work factor used at registration
    pub bcrypt_cost: u32,
}

impl AppState {
    pub fn new(db: Database, config: &ServerConfig) -> Self {
        Self {
            db,
            tokens: Arc::new(TokenService::new(config.jwt_secret.as_bytes())),
            bcrypt_cost: config.bcrypt_cost,
        }
    }

    /// State over `db` with an explicit secret and the default bcrypt cost
    pub fn with_secret(db: Database, secret: &[u8]) -> Self {
        Self {
            db,
            tokens: Arc::new(TokenService::new(secret)),
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }

    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }
}

impl FromRef<AppState> for Database {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
