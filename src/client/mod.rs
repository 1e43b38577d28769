//! Client Module
//!
//! The client application core, without any rendering: everything a UI needs
//! to talk to the API and present the caller's links.
//!
//! - **`config`** - API base URL and local file locations
//! - **`api`** - async HTTP client for the REST API
//! - **`session`** - persisted token and cached profile
//! - **`category`** - category detection and resolution
//! - **`link_book`** - loaded links with search and category filtering
//! - **`offline`** - links saved while signed out, pushed on sign-in
//! - **`error`** - `ClientError`

pub mod api;
pub mod category;
pub mod config;
pub mod error;
pub mod link_book;
pub mod offline;
pub mod session;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use link_book::{LinkBook, LinkEdit};
pub use offline::OfflineQueue;
pub use session::Session;
