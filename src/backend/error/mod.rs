//! Backend Error Module
//!
//! Error types for the REST API and their conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - ApiError and its From impls
//! └── conversion.rs - IntoResponse for ApiError
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::ApiError;

/// Result alias used by handlers and stores
pub type ApiResult<T> = Result<T, ApiError>;
