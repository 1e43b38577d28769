//! Common test utilities and helpers
//!
//! - in-memory database and app state
//! - `axum-test` server over the real router
//! - user registration helpers

#![allow(dead_code)]

use axum::http::{HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::json;
use tokio::net::TcpListener;

use linkcrawler::backend::routes::create_router;
use linkcrawler::backend::server::{AppState, Database};
use linkcrawler::shared::AuthResponse;

pub const TEST_SECRET: &[u8] = b"integration-test-secret";

/// App state over a fresh, migrated in-memory database
pub async fn test_state() -> AppState {
    let db = Database::in_memory().await.expect("in-memory database");
    db.migrate().await.expect("migrations");
    AppState::with_secret(db, TEST_SECRET).with_bcrypt_cost(4)
}

pub async fn test_server() -> (TestServer, AppState) {
    let state = test_state().await;
    let server = TestServer::new(create_router(state.clone())).expect("test server");
    (server, state)
}

/// Register `username` with `password` and return the auth response
pub async fn register(server: &TestServer, username: &str, password: &str) -> AuthResponse {
    let response = server
        .post("/api/auth/register")
        .json(&json!({ "username": username, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json::<AuthResponse>()
}

pub fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {token}")).expect("header value")
}

/// Serve the real router on an ephemeral local port and return its base URL
pub async fn spawn_server(state: AppState) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, create_router(state)).await.expect("serve");
    });
    format!("http://{addr}")
}
