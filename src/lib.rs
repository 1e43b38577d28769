//! LinkCrawler - Main Library
//!
//! LinkCrawler is a personal bookmark service: users register, sign in and
//! keep a private list of saved links with notes and tags.
//!
//! # Module Structure
//!
//! - **`shared`** - wire types used by both the server and the client
//!   - Auth request/response bodies, user profile
//!   - Link, link request/response bodies, error body
//!
//! - **`backend`** - REST API server (only compiled with the `server` feature)
//!   - Axum router, auth middleware, handlers
//!   - SQLite persistence through sqlx
//!   - Token issuance and password hashing
//!
//! - **`client`** - client application core
//!   - HTTP client for the REST API
//!   - Persisted session and offline queue
//!   - Category detection, filtering and search over loaded links
//!
//! # Feature Flags
//!
//! - **`server`** (default) - builds the backend and the `linkcrawler-server` binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use linkcrawler::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let (app, _db) = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "server")]
pub mod backend;

/// Client application core
pub mod client;
