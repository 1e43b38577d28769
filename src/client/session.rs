//! Persisted Session
//!
//! The token and cached profile of the signed-in user, stored as JSON so a
//! restart does not force a new login. Logging out clears both the in-memory
//! value and the file.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::client::error::ClientError;
use crate::shared::{AuthResponse, UserProfile};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

impl Session {
    pub fn from_auth(response: &AuthResponse) -> Self {
        Self {
            token: Some(response.token.clone()),
            user: Some(response.user.clone()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Load the session at `path`; a missing file is an empty session
    pub fn load(path: &Path) -> Result<Self, ClientError> {
        match fs::read(path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Write the session to `path`, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<(), ClientError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_vec_pretty(self)?)?;
        tracing::debug!("Session saved to {}", path.display());
        Ok(())
    }

    /// Forget token and user, and remove the file at `path`
    pub fn clear(&mut self, path: &Path) -> Result<(), ClientError> {
        self.token = None;
        self.user = None;
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    fn auth_response() -> AuthResponse {
        AuthResponse {
            message: "Login successful".to_string(),
            token: "tok-123".to_string(),
            user: UserProfile {
                id: Uuid::new_v4(),
                name: Some("Alice".to_string()),
                username: Some("alice".to_string()),
                email: None,
                created_at: Utc::now(),
            },
        }
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let session = Session::from_auth(&auth_response());
        session.save(&path).unwrap();

        let loaded = Session::load(&path).unwrap();
        assert_eq!(loaded, session);
        assert!(loaded.is_authenticated());
    }

    #[test]
    fn test_missing_file_is_empty_session() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::load(&dir.path().join("absent.json")).unwrap();
        assert!(!session.is_authenticated());
        assert!(session.user.is_none());
    }

    #[test]
    fn test_corrupt_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(Session::load(&path), Err(ClientError::Decode(_))));
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut session = Session::from_auth(&auth_response());
        session.save(&path).unwrap();
        session.clear(&path).unwrap();

        assert_eq!(session, Session::default());
        assert!(!path.exists());
        session.clear(&path).unwrap();
    }
}
