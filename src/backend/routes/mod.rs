//! Route Configuration Module
//!
//! - **`router`** - main router creation, layers and fallback
//! - **`api_routes`** - the `/api` endpoints

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

pub use router::create_router;
