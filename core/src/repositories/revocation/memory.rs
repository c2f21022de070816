//! Process-local revocation store

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::clock::Clock;
use crate::errors::StoreError;

use super::trait_::RevocationStore;

/// Revocation store backed by a map from key to expiry instant
///
/// Entries are dropped lazily: `exists` ignores expired entries and `put`
/// sweeps them out. Revocations do not survive a restart, so this store is
/// meant for single-instance deployments and tests.
pub struct InMemoryRevocationStore {
    entries: Arc<RwLock<HashMap<String, DateTime<Utc>>>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryRevocationStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            clock,
        }
    }

    /// Expiry instant of a live entry
    pub async fn expires_at(&self, key: &str) -> Option<DateTime<Utc>> {
        let now = self.clock.now();
        let entries = self.entries.read().await;
        entries.get(key).copied().filter(|expiry| *expiry > now)
    }

    /// Number of live entries
    pub async fn len(&self) -> usize {
        let now = self.clock.now();
        let entries = self.entries.read().await;
        entries.values().filter(|expiry| **expiry > now).count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl RevocationStore for InMemoryRevocationStore {
    async fn put(&self, key: &str, ttl_seconds: i64) -> Result<(), StoreError> {
        if ttl_seconds <= 0 {
            return Ok(());
        }

        let now = self.clock.now();
        let mut entries = self.entries.write().await;
        entries.retain(|_, expiry| *expiry > now);
        entries.insert(key.to_string(), now + Duration::seconds(ttl_seconds));

        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        let now = self.clock.now();
        let entries = self.entries.read().await;
        Ok(entries.get(key).is_some_and(|expiry| *expiry > now))
    }
}
