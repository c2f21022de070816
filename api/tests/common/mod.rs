//! Shared fixtures for the HTTP tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use actix_web::web;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use sg_api::{AppState, SessionService};
use sg_core::clock::{Clock, ManualClock};
use sg_core::domain::entities::login_event::LoginEvent;
use sg_core::domain::entities::principal::{Principal, PrincipalId};
use sg_core::errors::{AuthError, DomainError, StoreError};
use sg_core::repositories::{InMemoryRevocationStore, RevocationStore, UserDirectory};
use sg_core::services::session::{CredentialVerifier, SessionController};
use sg_core::services::token::{
    SigningKeys, TokenCodec, TokenIssuer, TokenServiceConfig, TokenValidator,
};

pub const EMAIL: &str = "alice@example.com";
pub const SECRET: &str = "pw123456";
pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64)";

/// Directory over an in-memory principal table
#[derive(Default)]
pub struct TestDirectory {
    principals: Mutex<HashMap<String, Principal>>,
    logins: Mutex<Vec<LoginEvent>>,
}

impl TestDirectory {
    pub fn insert(&self, principal: Principal) {
        self.principals
            .lock()
            .unwrap()
            .insert(principal.email.clone(), principal);
    }

    pub fn deactivate(&self, email: &str) {
        if let Some(principal) = self.principals.lock().unwrap().get_mut(email) {
            principal.deactivate();
        }
    }
}

#[async_trait]
impl UserDirectory for TestDirectory {
    async fn find_by_identifier(&self, id: PrincipalId) -> Result<Option<Principal>, DomainError> {
        let principals = self.principals.lock().unwrap();
        Ok(principals.values().find(|p| p.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Principal>, DomainError> {
        Ok(self.principals.lock().unwrap().get(email).cloned())
    }

    async fn create(&self, principal: &Principal) -> Result<(), DomainError> {
        let mut principals = self.principals.lock().unwrap();
        if principals.contains_key(&principal.email) {
            return Err(AuthError::IdentifierTaken.into());
        }
        principals.insert(principal.email.clone(), principal.clone());
        Ok(())
    }

    async fn update(&self, principal: &Principal) -> Result<(), DomainError> {
        let mut principals = self.principals.lock().unwrap();
        if principals
            .get(&principal.email)
            .is_some_and(|existing| existing.id != principal.id)
        {
            return Err(AuthError::IdentifierTaken.into());
        }
        principals.retain(|_, existing| existing.id != principal.id);
        principals.insert(principal.email.clone(), principal.clone());
        Ok(())
    }

    async fn record_login(
        &self,
        principal_id: PrincipalId,
        client_descriptor: &str,
        occurred_at: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        self.logins.lock().unwrap().push(LoginEvent::new(
            principal_id,
            Some(client_descriptor),
            occurred_at,
        ));
        Ok(())
    }

    async fn login_history(
        &self,
        principal_id: PrincipalId,
        skip: u32,
        limit: u32,
    ) -> Result<Vec<LoginEvent>, DomainError> {
        let mut events: Vec<LoginEvent> = self
            .logins
            .lock()
            .unwrap()
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

/// Hash format understood by [`TestVerifier`]
pub fn test_hash(secret: &str) -> String {
    format!("test-hash:{}", secret)
}

/// Verifier comparing secrets against the hashes stored in [`TestDirectory`]
pub struct TestVerifier {
    directory: Arc<TestDirectory>,
}

#[async_trait]
impl CredentialVerifier for TestVerifier {
    async fn verify(&self, identifier: &str, secret: &str) -> Result<bool, DomainError> {
        let principal = self.directory.find_by_email(identifier).await?;
        Ok(principal.is_some_and(|p| p.credential_hash == test_hash(secret)))
    }

    async fn hash(&self, secret: &str) -> Result<String, DomainError> {
        Ok(test_hash(secret))
    }
}

/// Store that is always unreachable
pub struct DownStore;

#[async_trait]
impl RevocationStore for DownStore {
    async fn put(&self, _key: &str, _ttl_seconds: i64) -> Result<(), StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }

    async fn exists(&self, _key: &str) -> Result<bool, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }
}

pub struct TestContext {
    pub clock: ManualClock,
    pub directory: Arc<TestDirectory>,
    pub state: web::Data<AppState>,
}

/// HS256 state with one active principal and an in-memory store
pub fn test_context() -> TestContext {
    let clock = ManualClock::starting_now();
    let store: Arc<dyn RevocationStore> =
        Arc::new(InMemoryRevocationStore::new(Arc::new(clock.clone())));
    build_context(clock, store)
}

/// Same as [`test_context`] but with a store that refuses every call
pub fn test_context_with_down_store() -> TestContext {
    build_context(ManualClock::starting_now(), Arc::new(DownStore))
}

fn build_context(clock: ManualClock, store: Arc<dyn RevocationStore>) -> TestContext {
    let shared_clock: Arc<dyn Clock> = Arc::new(clock.clone());
    let config = TokenServiceConfig::default();
    let keys = SigningKeys::from_secret(config.algorithm, b"sessionguard-http-test-secret").unwrap();
    let codec = Arc::new(TokenCodec::new(Arc::new(keys), &config, shared_clock.clone()));
    let issuer = Arc::new(TokenIssuer::new(codec.clone(), &config).unwrap());
    let validator = Arc::new(TokenValidator::new(codec, store.clone()));

    let directory = Arc::new(TestDirectory::default());
    directory.insert(Principal::new(EMAIL, test_hash(SECRET)));

    let directory_port: Arc<dyn UserDirectory> = directory.clone();
    let verifier: Arc<dyn CredentialVerifier> = Arc::new(TestVerifier {
        directory: directory.clone(),
    });

    let session: Arc<SessionService> = Arc::new(SessionController::new(
        verifier,
        directory_port,
        issuer,
        validator,
        store,
        shared_clock,
    ));

    TestContext {
        clock,
        directory,
        state: web::Data::new(AppState::new(session)),
    }
}
