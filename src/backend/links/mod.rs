//! Links Module
//!
//! Owner-scoped storage and HTTP handlers for saved links.
//!
//! - **`db`** - link store queries
//! - **`handlers`** - `/api/links` and `/api/health` handlers

pub mod db;
pub mod handlers;

pub use handlers::{create_link, delete_link, delete_link_missing_id, health, list_links};
