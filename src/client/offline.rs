//! # Offline Queue
//!
//! Links saved while signed out wait here until the user signs in.
//!
//! ## Behavior
//!
//! - **Persistent**: the queue is a JSON array on disk and survives restarts
//! - **Ordered**: `sync` pushes links oldest first
//! - **Stop on failure**: the first failed push ends the run and leaves that
//!   link and everything after it queued for next time
//!
//! ## Usage
//!
//! ```rust,no_run
//! use linkcrawler::client::{ApiClient, OfflineQueue};
//! use linkcrawler::shared::CreateLinkRequest;
//!
//! # async fn example(client: ApiClient) -> Result<(), linkcrawler::client::ClientError> {
//! let mut queue = OfflineQueue::load("unsynced_links.json")?;
//! queue.push(CreateLinkRequest::new("Example", "http://example.com"))?;
//!
//! let synced = queue.sync(&client).await?;
//! println!("pushed {synced} links");
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::client::api::ApiClient;
use crate::client::error::ClientError;
use crate::shared::CreateLinkRequest;

#[derive(Debug, Default)]
pub struct OfflineQueue {
    path: Option<PathBuf>,
    pending: Vec<CreateLinkRequest>,
}

impl OfflineQueue {
    /// Queue that is never written to disk
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Queue backed by the file at `path`; a missing file is an empty queue
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ClientError> {
        let path = path.into();
        let pending = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path: Some(path),
            pending,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn pending(&self) -> &[CreateLinkRequest] {
        &self.pending
    }

    pub fn push(&mut self, link: CreateLinkRequest) -> Result<(), ClientError> {
        self.pending.push(link);
        self.persist()
    }

    /// Push queued links to the server in order
    ///
    /// Each link is removed (and the file rewritten) as soon as the server
    /// accepts it. The first failure stops the run; an auth failure is logged
    /// as such. Returns the number of links pushed. Only a local storage
    /// failure is returned as an error.
    pub async fn sync(&mut self, client: &ApiClient) -> Result<usize, ClientError> {
        let mut synced = 0;

        while let Some(link) = self.pending.first() {
            match client.create_link(link).await {
                Ok(saved) => {
                    tracing::debug!("Synced offline link {}", saved.id);
                    self.pending.remove(0);
                    self.persist()?;
                    synced += 1;
                }
                Err(e) if e.is_unauthorized() => {
                    tracing::warn!("Sync stopped: authentication required");
                    break;
                }
                Err(e) => {
                    tracing::warn!("Sync failed, will retry later: {}", e);
                    break;
                }
            }
        }

        if synced > 0 {
            tracing::info!("Synced {} offline links, {} remaining", synced, self.pending.len());
        }
        Ok(synced)
    }

    fn persist(&self) -> Result<(), ClientError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_vec(&self.pending)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::config::ClientConfig;
    use serde_json::json;
    use uuid::Uuid;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn saved(title: &str) -> ResponseTemplate {
        ResponseTemplate::new(201).set_body_json(json!({
            "message": "Link saved",
            "link": {
                "id": Uuid::new_v4(),
                "user": Uuid::new_v4(),
                "title": title,
                "url": "http://example.com",
                "notes": "",
                "tags": [],
                "visits": 0,
                "createdAt": "2025-01-01T00:00:00Z"
            }
        }))
    }

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(ClientConfig::default().with_base_url(server.uri())).with_token("t")
    }

    #[test]
    fn test_queue_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("queue.json");

        let mut queue = OfflineQueue::load(&path).unwrap();
        assert!(queue.is_empty());
        queue.push(CreateLinkRequest::new("A", "http://a.example")).unwrap();
        queue.push(CreateLinkRequest::new("B", "http://b.example")).unwrap();

        let reloaded = OfflineQueue::load(&path).unwrap();
        let titles: Vec<_> = reloaded.pending().iter().map(|l| l.title.clone()).collect();
        assert_eq!(titles, vec![Some("A".to_string()), Some("B".to_string())]);
    }

    #[tokio::test]
    async fn test_sync_pushes_everything() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/links"))
            .respond_with(saved("any"))
            .expect(2)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("queue.json");
        let mut queue = OfflineQueue::load(&path).unwrap();
        queue.push(CreateLinkRequest::new("A", "http://a.example")).unwrap();
        queue.push(CreateLinkRequest::new("B", "http://b.example")).unwrap();

        assert_eq!(queue.sync(&client_for(&server)).await.unwrap(), 2);
        assert!(queue.is_empty());
        assert!(OfflineQueue::load(&path).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sync_stops_at_first_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/links"))
            .and(body_partial_json(json!({"title": "A"})))
            .respond_with(saved("A"))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/links"))
            .and(body_partial_json(json!({"title": "B"})))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "message": "Server error",
                "status": 500
            })))
            .mount(&server)
            .await;

        let mut queue = OfflineQueue::in_memory();
        for title in ["A", "B", "C"] {
            queue.push(CreateLinkRequest::new(title, "http://example.com")).unwrap();
        }

        assert_eq!(queue.sync(&client_for(&server)).await.unwrap(), 1);
        let remaining: Vec<_> = queue.pending().iter().map(|l| l.title.clone()).collect();
        assert_eq!(remaining, vec![Some("B".to_string()), Some("C".to_string())]);
    }

    #[tokio::test]
    async fn test_sync_stops_on_unauthorized() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/links"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "message": "Invalid or expired token",
                "status": 401
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut queue = OfflineQueue::in_memory();
        queue.push(CreateLinkRequest::new("A", "http://a.example")).unwrap();
        queue.push(CreateLinkRequest::new("B", "http://b.example")).unwrap();

        assert_eq!(queue.sync(&client_for(&server)).await.unwrap(), 0);
        assert_eq!(queue.len(), 2);
    }

    #[tokio::test]
    async fn test_sync_without_token() {
        let client = ApiClient::new(ClientConfig::default().with_base_url("http://127.0.0.1:9"));
        let mut queue = OfflineQueue::in_memory();
        queue.push(CreateLinkRequest::new("A", "http://a.example")).unwrap();

        assert_eq!(queue.sync(&client).await.unwrap(), 0);
        assert_eq!(queue.len(), 1);
    }
}
