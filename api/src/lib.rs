//! # SessionGuard API
//!
//! actix-web surface over the session controller: login, refresh, logout,
//! bearer verification for downstream services, and principal lookups.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::create_app;
pub use routes::{AppState, SessionService};
