//! Shared Module
//!
//! Wire types exchanged between the backend and the client. Everything here
//! serializes to the JSON shapes served under `/api`, so both sides agree on
//! field names (`createdAt`, `user`, ...) without duplicating structs.

/// Authentication request and response bodies
pub mod auth;

/// Link records and link request/response bodies
pub mod link;

pub use auth::{AuthResponse, LoginRequest, RegisterRequest, UserProfile};
pub use link::{
    CreateLinkRequest, ErrorBody, HealthResponse, Link, LinkCreatedResponse, LinkDeletedResponse,
};
