//! Client Error Types
//!
//! Every fallible client operation returns `ClientError`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced an HTTP response
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// A response or stored file was not the expected JSON
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The call needs a token and none is held
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Reading or writing a local file failed
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),
}

impl ClientError {
    /// HTTP status for `Api` errors
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server rejected the caller's credentials
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::NotAuthenticated) || self.status() == Some(401)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_detection() {
        assert!(ClientError::NotAuthenticated.is_unauthorized());
        assert!(ClientError::Api {
            status: 401,
            message: "Invalid or expired token".to_string()
        }
        .is_unauthorized());
        assert!(!ClientError::Api {
            status: 403,
            message: "Not authorized to delete this link".to_string()
        }
        .is_unauthorized());
    }

    #[test]
    fn test_api_error_display() {
        let error = ClientError::Api {
            status: 404,
            message: "Link not found".to_string(),
        };
        assert_eq!(error.to_string(), "API error 404: Link not found");
        assert_eq!(error.status(), Some(404));
    }
}
