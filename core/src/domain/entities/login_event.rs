//! Login history entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::principal::PrincipalId;

/// Client descriptor recorded when the caller sent none
pub const UNKNOWN_CLIENT: &str = "Unknown";

/// Append-only record of a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginEvent {
    pub principal_id: PrincipalId,

    /// Client descriptor, typically the User-Agent header
    pub client_descriptor: String,

    pub occurred_at: DateTime<Utc>,
}

impl LoginEvent {
    pub fn new(
        principal_id: PrincipalId,
        client_descriptor: Option<&str>,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            principal_id,
            client_descriptor: normalize_client_descriptor(client_descriptor).to_string(),
            occurred_at,
        }
    }
}

/// Blank or missing descriptors are recorded as [`UNKNOWN_CLIENT`]
pub fn normalize_client_descriptor(client_descriptor: Option<&str>) -> &str {
    match client_descriptor.map(str::trim) {
        Some(descriptor) if !descriptor.is_empty() => descriptor,
        _ => UNKNOWN_CLIENT,
    }
}
