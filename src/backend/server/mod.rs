//! Server Module
//!
//! Configuration, storage handle, shared state and startup.
//!
//! - **`config`** - `ServerConfig` loaded from the environment
//! - **`database`** - `Database`, the sqlx pool and migrations
//! - **`state`** - `AppState` and `FromRef` implementations
//! - **`init`** - `create_app`, which turns a config into a router

/// Server configuration loading
pub mod config;

/// Storage handle
pub mod database;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ServerConfig};
pub use database::Database;
pub use init::{create_app, StartupError};
pub use state::AppState;
