//! Principal entity owned by the user directory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a principal record
pub type PrincipalId = Uuid;

/// An authenticated party that tokens are issued for
///
/// Principals are never deleted by this core; they are deactivated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Record identifier
    pub id: PrincipalId,

    /// Unique login identifier, used as the token subject
    pub email: String,

    /// Opaque credential hash, only meaningful to the credential verifier
    #[serde(skip_serializing, default)]
    pub credential_hash: String,

    /// Inactive principals cannot log in
    pub is_active: bool,

    /// Timestamp when the principal was registered
    pub created_at: DateTime<Utc>,
}

impl Principal {
    /// Creates a new active principal
    pub fn new(email: impl Into<String>, credential_hash: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            credential_hash: credential_hash.into(),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}
