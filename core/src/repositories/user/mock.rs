//! Mock implementation of UserDirectory for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::login_event::LoginEvent;
use crate::domain::entities::principal::{Principal, PrincipalId};
use crate::errors::{AuthError, DomainError};

use super::trait_::UserDirectory;

/// In-memory user directory for testing
pub struct MockUserDirectory {
    principals: Arc<RwLock<HashMap<PrincipalId, Principal>>>,
    logins: Arc<RwLock<Vec<LoginEvent>>>,
    fail_record_login: AtomicBool,
}

impl MockUserDirectory {
    pub fn new() -> Self {
        Self {
            principals: Arc::new(RwLock::new(HashMap::new())),
            logins: Arc::new(RwLock::new(Vec::new())),
            fail_record_login: AtomicBool::new(false),
        }
    }

    pub async fn insert(&self, principal: Principal) {
        self.principals.write().await.insert(principal.id, principal);
    }

    pub async fn deactivate(&self, id: PrincipalId) {
        if let Some(principal) = self.principals.write().await.get_mut(&id) {
            principal.deactivate();
        }
    }

    pub async fn remove(&self, id: PrincipalId) {
        self.principals.write().await.remove(&id);
    }

    /// Make every `record_login` call fail
    pub fn fail_record_login(&self) {
        self.fail_record_login.store(true, Ordering::SeqCst);
    }

    pub async fn recorded_logins(&self) -> Vec<LoginEvent> {
        self.logins.read().await.clone()
    }
}

impl Default for MockUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserDirectory for MockUserDirectory {
    async fn find_by_identifier(&self, id: PrincipalId) -> Result<Option<Principal>, DomainError> {
        Ok(self.principals.read().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Principal>, DomainError> {
        let principals = self.principals.read().await;
        Ok(principals.values().find(|p| p.email == email).cloned())
    }

    async fn create(&self, principal: &Principal) -> Result<(), DomainError> {
        let mut principals = self.principals.write().await;
        if principals.values().any(|p| p.email == principal.email) {
            return Err(AuthError::IdentifierTaken.into());
        }
        principals.insert(principal.id, principal.clone());
        Ok(())
    }

    async fn update(&self, principal: &Principal) -> Result<(), DomainError> {
        let mut principals = self.principals.write().await;
        if principals
            .values()
            .any(|p| p.email == principal.email && p.id != principal.id)
        {
            return Err(AuthError::IdentifierTaken.into());
        }
        match principals.get_mut(&principal.id) {
            Some(stored) => {
                *stored = principal.clone();
                Ok(())
            }
            None => Err(AuthError::PrincipalNotFound.into()),
        }
    }

    async fn record_login(
        &self,
        principal_id: PrincipalId,
        client_descriptor: &str,
        occurred_at: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        if self.fail_record_login.load(Ordering::SeqCst) {
            return Err(DomainError::Directory {
                message: "login history table unavailable".to_string(),
            });
        }

        self.logins
            .write()
            .await
            .push(LoginEvent::new(principal_id, Some(client_descriptor), occurred_at));
        Ok(())
    }

    async fn login_history(
        &self,
        principal_id: PrincipalId,
        skip: u32,
        limit: u32,
    ) -> Result<Vec<LoginEvent>, DomainError> {
        let logins = self.logins.read().await;
        let mut events: Vec<LoginEvent> = logins
            .iter()
            .filter(|e| e.principal_id == principal_id)
            .cloned()
            .collect();
        events.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));

        Ok(events
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect())
    }
}
