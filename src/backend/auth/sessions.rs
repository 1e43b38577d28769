/**
 * Session Management and JWT Tokens
 *
 * This module issues and verifies the bearer tokens handed out by register
 * and login. Tokens are HS256 JWTs carrying `{ id, username, email, iat, exp }`
 * and expire 7 days after issuance. Nothing is stored server-side: a token is
 * valid until it expires.
 *
 * The signing secret comes from `ServerConfig` and is turned into keys once,
 * when `TokenService` is built at startup.
 */

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::auth::users::User;

/// Token lifetime: 7 days
pub const TOKEN_LIFETIME: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// User ID. Optional so that a signed token without it still decodes and
    /// can be rejected as an invalid payload rather than a bad signature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Issued at (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

#[derive(Debug, Error)]
pub enum TokenError {
    /// Bad signature, wrong algorithm, malformed or expired token
    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("failed to sign token: {0}")]
    Signing(String),
}

/// Issues and verifies session tokens with a process-wide secret
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    lifetime: Duration,
}

impl TokenService {
    pub fn new(secret: &[u8]) -> Self {
        Self::with_lifetime(secret, TOKEN_LIFETIME)
    }

    pub fn with_lifetime(secret: &[u8], lifetime: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            lifetime,
        }
    }

    /// Create a token for `user` expiring after the configured lifetime
    pub fn issue(&self, user: &User) -> Result<String, TokenError> {
        let now = Utc::now().timestamp().max(0) as u64;

        let claims = Claims {
            id: Some(user.id.to_string()),
            username: user.username.clone(),
            email: user.email.clone(),
            iat: now,
            exp: now + self.lifetime.as_secs(),
        };

        self.sign(&claims)
    }

    /// Sign arbitrary claims with the service secret
    pub fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify signature, algorithm and expiry, returning the embedded claims
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| TokenError::InvalidToken(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use uuid::Uuid;

    fn user(username: Option<&str>, email: Option<&str>) -> User {
        User {
            id: Uuid::new_v4(),
            name: None,
            username: username.map(str::to_string),
            email: email.map(str::to_string),
            password_hash: "hash".to_string(),
            created_at: Utc::now(),
        }
    }

    fn now() -> u64 {
        Utc::now().timestamp() as u64
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let service = TokenService::new(b"secret");
        let alice = user(Some("alice"), Some("alice@example.com"));

        let token = service.issue(&alice).unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.id, Some(alice.id.to_string()));
        assert_eq!(claims.username.as_deref(), Some("alice"));
        assert_eq!(claims.email.as_deref(), Some("alice@example.com"));
        assert_eq!(claims.exp - claims.iat, TOKEN_LIFETIME.as_secs());
    }

    #[test]
    fn test_missing_identity_fields_roundtrip_as_none() {
        let service = TokenService::new(b"secret");
        let token = service.issue(&user(None, Some("bob@example.com"))).unwrap();
        let claims = service.verify(&token).unwrap();
        assert!(claims.username.is_none());
        assert_eq!(claims.email.as_deref(), Some("bob@example.com"));
    }

    #[test]
    fn test_different_secret_is_rejected() {
        let token = TokenService::new(b"secret-a")
            .issue(&user(Some("alice"), None))
            .unwrap();
        let result = TokenService::new(b"secret-b").verify(&token);
        assert_matches!(result, Err(TokenError::InvalidToken(_)));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = TokenService::new(b"secret");
        let claims = Claims {
            id: Some(Uuid::new_v4().to_string()),
            username: Some("alice".to_string()),
            email: None,
            iat: now() - 8 * 24 * 3600,
            exp: now() - 24 * 3600,
        };
        let token = service.sign(&claims).unwrap();
        assert_matches!(service.verify(&token), Err(TokenError::InvalidToken(_)));
    }

    #[test]
    fn test_other_algorithm_is_rejected() {
        let claims = Claims {
            id: Some(Uuid::new_v4().to_string()),
            username: None,
            email: None,
            iat: now(),
            exp: now() + 3600,
        };
        let token = encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(b"secret"),
        )
        .unwrap();
        let result = TokenService::new(b"secret").verify(&token);
        assert_matches!(result, Err(TokenError::InvalidToken(_)));
    }

    #[test]
    fn test_malformed_token_is_rejected() {
        let service = TokenService::new(b"secret");
        assert_matches!(service.verify("invalid.token.here"), Err(TokenError::InvalidToken(_)));
        assert_matches!(service.verify(""), Err(TokenError::InvalidToken(_)));
    }

    #[test]
    fn test_token_without_id_still_verifies() {
        let service = TokenService::new(b"secret");
        let claims = Claims {
            id: None,
            username: Some("alice".to_string()),
            email: None,
            iat: now(),
            exp: now() + 3600,
        };
        let token = service.sign(&claims).unwrap();
        assert_eq!(service.verify(&token).unwrap().id, None);
    }
}
