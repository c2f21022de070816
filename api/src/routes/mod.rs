//! HTTP route handlers

pub mod auth;
pub mod health;
pub mod users;

use std::sync::Arc;

use sg_core::repositories::{RevocationStore, UserDirectory};
use sg_core::services::session::{CredentialVerifier, SessionController};

/// Session controller over the concrete adapters picked at startup
pub type SessionService =
    SessionController<dyn CredentialVerifier, dyn UserDirectory, dyn RevocationStore>;

/// Application state shared by every handler
pub struct AppState {
    pub session: Arc<SessionService>,
}

impl AppState {
    pub fn new(session: Arc<SessionService>) -> Self {
        Self { session }
    }
}
