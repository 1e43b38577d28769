/**
 * REST API Client
 *
 * Async HTTP client for the LinkCrawler API. Holds the session token and adds
 * it as `Authorization: Bearer <token>` to calls that need it.
 *
 * # Error Mapping
 *
 * - transport failure → `ClientError::Network`
 * - non-2xx → `ClientError::Api`, with the body's `message` when the body is
 *   JSON and the raw text otherwise
 * - unexpected 2xx body → `ClientError::Decode`
 * - token-requiring call without a token → `ClientError::NotAuthenticated`,
 *   before any request is sent
 */

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::client::config::ClientConfig;
use crate::client::error::ClientError;
use crate::shared::{
    AuthResponse, CreateLinkRequest, ErrorBody, HealthResponse, Link, LinkCreatedResponse,
    LinkDeletedResponse, LoginRequest, RegisterRequest, UserProfile,
};

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: Client::new(),
            config,
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Forget the token (logout)
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let request = self.http.get(self.config.api_url("/api/health"));
        send(request).await
    }

    /// Register and keep the returned token
    pub async fn register(&mut self, body: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        let request = self.http.post(self.config.api_url("/api/auth/register")).json(body);
        let response: AuthResponse = send(request).await?;
        self.token = Some(response.token.clone());
        Ok(response)
    }

    /// Log in and keep the returned token
    pub async fn login(&mut self, body: &LoginRequest) -> Result<AuthResponse, ClientError> {
        let request = self.http.post(self.config.api_url("/api/auth/login")).json(body);
        let response: AuthResponse = send(request).await?;
        self.token = Some(response.token.clone());
        Ok(response)
    }

    pub async fn me(&self) -> Result<UserProfile, ClientError> {
        let request = self.authorized(self.http.get(self.config.api_url("/api/auth/me")))?;
        send(request).await
    }

    /// The caller's links, newest first
    pub async fn fetch_links(&self) -> Result<Vec<Link>, ClientError> {
        let request = self.authorized(self.http.get(self.config.api_url("/api/links")))?;
        send(request).await
    }

    /// Save a link and return it as stored by the server
    pub async fn create_link(&self, body: &CreateLinkRequest) -> Result<Link, ClientError> {
        let request = self.authorized(self.http.post(self.config.api_url("/api/links")).json(body))?;
        let response: LinkCreatedResponse = send(request).await?;
        Ok(response.link)
    }

    pub async fn delete_link(&self, id: Uuid) -> Result<LinkDeletedResponse, ClientError> {
        let url = self.config.api_url(&format!("/api/links/{id}"));
        let request = self.authorized(self.http.delete(url))?;
        send(request).await
    }

    fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder, ClientError> {
        let token = self.token.as_deref().ok_or(ClientError::NotAuthenticated)?;
        Ok(request.bearer_auth(token))
    }
}

async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ClientError> {
    let response = request.send().await?;
    decode(response).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        let message = match serde_json::from_slice::<ErrorBody>(&body) {
            Ok(error) => error.message,
            Err(_) => {
                let text = String::from_utf8_lossy(&body).trim().to_string();
                if text.is_empty() {
                    format!("HTTP {}", status.as_u16())
                } else {
                    text
                }
            }
        };
        tracing::debug!("API error {}: {}", status, message);
        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_slice(&body)?)
}
