//! Backend Module
//!
//! Server-side code for the LinkCrawler REST API. Only compiled with the
//! `server` feature.
//!
//! # Architecture
//!
//! - **`server`** - configuration, database handle, state, startup
//! - **`routes`** - router assembly and route table
//! - **`auth`** - users, password hashing, tokens, `/api/auth` handlers
//! - **`links`** - link store and `/api/links` handlers
//! - **`middleware`** - `AuthUser` bearer-token extractor
//! - **`error`** - `ApiError` and its JSON rendering
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs
//! ├── main.rs         - server binary
//! ├── server/         - config, database, state, init
//! ├── routes/         - router and API routes
//! ├── auth/           - authentication
//! ├── links/          - saved links
//! ├── middleware/     - request extractors
//! └── error/          - error types
//! ```

pub mod auth;
pub mod error;
pub mod links;
pub mod middleware;
pub mod routes;
pub mod server;

pub use routes::create_router;
pub use server::{create_app, AppState};
