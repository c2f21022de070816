//! Middleware and extractors for bearer authentication

pub mod auth;

pub use auth::{extract_bearer_token, AuthContext, BearerAuth, BearerToken};
