//! Authentication Handlers Module
//!
//! HTTP handlers for the `/api/auth` endpoints.
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register - create an account, returns a token
//! - **`login`** - POST /api/auth/login - verify credentials, returns a token
//! - **`get_me`** - GET /api/auth/me - profile of the token's user

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

pub use login::login;
pub use me::get_me;
pub use register::register;

/// Trim `value` and treat an empty result as absent
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  alice ".to_string())), Some("alice".to_string()));
        assert_eq!(non_blank(Some("   ".to_string())), None);
        assert_eq!(non_blank(Some(String::new())), None);
        assert_eq!(non_blank(None), None);
    }
}
