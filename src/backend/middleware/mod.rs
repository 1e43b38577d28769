//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`auth`** - bearer-token authentication (`AuthUser` extractor)

pub mod auth;

pub use auth::{authenticate, AuthContext, AuthUser};
