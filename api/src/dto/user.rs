//! Principal views and login history paging

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use sg_core::domain::entities::login_event::LoginEvent;
use sg_core::domain::entities::principal::Principal;
use sg_core::domain::entities::token::Claims;

/// Default page size for login history
pub const DEFAULT_HISTORY_LIMIT: u32 = 20;

/// Public view of a principal; never carries the credential hash
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrincipalResponse {
    pub id: Uuid,
    pub email: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Principal> for PrincipalResponse {
    fn from(principal: Principal) -> Self {
        Self {
            id: principal.id,
            email: principal.email,
            is_active: principal.is_active,
            created_at: principal.created_at,
        }
    }
}

/// Principal view plus the issue time of the presented access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    #[serde(flatten)]
    pub principal: PrincipalResponse,
    pub logged_in_at: Option<DateTime<Utc>>,
}

impl SessionResponse {
    pub fn new(principal: Principal, claims: &Claims) -> Self {
        Self {
            principal: PrincipalResponse::from(principal),
            logged_in_at: claims.issued_at(),
        }
    }
}

/// Request body for `PUT /api/v1/users/me`; absent fields stay unchanged
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct UpdatePrincipalRequest {
    #[validate(email(message = "Email is not a valid address"))]
    pub email: Option<String>,

    #[validate(length(min = 6, max = 32, message = "Password must be between 6 and 32 characters"))]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginEventResponse {
    pub client: String,
    pub occurred_at: DateTime<Utc>,
}

impl From<LoginEvent> for LoginEventResponse {
    fn from(event: LoginEvent) -> Self {
        Self {
            client: event.client_descriptor,
            occurred_at: event.occurred_at,
        }
    }
}

/// Query string for `GET /api/v1/users/me/logins`
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct HistoryQuery {
    pub skip: Option<u32>,

    #[validate(range(min = 1, max = 100, message = "Limit must be between 1 and 100"))]
    pub limit: Option<u32>,
}

impl HistoryQuery {
    pub fn skip(&self) -> u32 {
        self.skip.unwrap_or(0)
    }

    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_HISTORY_LIMIT)
    }
}
