//! Authentication Module
//!
//! Accounts, password hashing, token issuance and the `/api/auth` handlers.
//!
//! # Architecture
//!
//! - **`users`** - user model and credential store queries
//! - **`password`** - bcrypt hashing off the async runtime
//! - **`sessions`** - HS256 token issuance and verification
//! - **`handlers`** - HTTP handlers for the auth endpoints
//!
//! # Authentication Flow
//!
//! 1. **Register**: password plus username and/or email → user created → token returned
//! 2. **Login**: identifier and password → credentials verified → token returned
//! 3. **Me**: bearer token → token verified → profile returned
//!
//! Tokens are signed with the server secret and expire after 7 days.

/// User model and database operations
pub mod users;

/// Password hashing
pub mod password;

/// Token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{get_me, login, register};
pub use sessions::{Claims, TokenError, TokenService};
pub use users::User;
