//! Client Configuration
//!
//! | Variable                | Default                 |
//! |-------------------------|-------------------------|
//! | `LINKCRAWLER_API_BASE`  | `http://localhost:4000` |
//!
//! Session and offline-queue files live under the platform config directory
//! (`<config dir>/linkcrawler/`) unless set explicitly.

use std::path::PathBuf;

pub const DEFAULT_API_BASE: &str = "http://localhost:4000";

const APP_DIR: &str = "linkcrawler";
const SESSION_FILE: &str = "session.json";
const QUEUE_FILE: &str = "unsynced_links.json";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    session_path: Option<PathBuf>,
    queue_path: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let dir = dirs::config_dir().map(|d| d.join(APP_DIR));
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            session_path: dir.as_ref().map(|d| d.join(SESSION_FILE)),
            queue_path: dir.map(|d| d.join(QUEUE_FILE)),
        }
    }
}

impl ClientConfig {
    /// Configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self::default();
        match lookup("LINKCRAWLER_API_BASE").filter(|v| !v.trim().is_empty()) {
            Some(base_url) => config.with_base_url(base_url.trim()),
            None => config,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_session_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_path = Some(path.into());
        self
    }

    pub fn with_queue_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.queue_path = Some(path.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn session_path(&self) -> Option<&PathBuf> {
        self.session_path.as_ref()
    }

    pub fn queue_path(&self) -> Option<&PathBuf> {
        self.queue_path.as_ref()
    }
}
