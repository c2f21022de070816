//! Redis implementation of the revocation store

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use tracing::debug;

use sg_core::errors::StoreError;
use sg_core::repositories::RevocationStore;

use super::redis_client::RedisClient;

/// Revocation store keeping one `SET ... EX` entry per revoked token
///
/// Tokens are hashed with SHA-256 and namespaced under a prefix, so raw
/// bearer tokens never reach Redis. Entries expire through Redis' own TTL.
#[derive(Clone)]
pub struct RedisRevocationStore {
    client: RedisClient,
    key_prefix: String,
}

impl RedisRevocationStore {
    pub fn new(client: RedisClient) -> Self {
        let key_prefix = client.config().key_prefix.clone();
        Self { client, key_prefix }
    }

    pub fn with_prefix(client: RedisClient, key_prefix: impl Into<String>) -> Self {
        Self {
            client,
            key_prefix: key_prefix.into(),
        }
    }

    pub fn storage_key(&self, token: &str) -> String {
        storage_key(&self.key_prefix, token)
    }
}

/// `{prefix}:{sha256(token) as hex}`
pub fn storage_key(prefix: &str, token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{}:{:x}", prefix, hasher.finalize())
}

#[async_trait]
impl RevocationStore for RedisRevocationStore {
    async fn put(&self, key: &str, ttl_seconds: i64) -> Result<(), StoreError> {
        let Ok(ttl) = u64::try_from(ttl_seconds) else {
            return Ok(());
        };
        if ttl == 0 {
            return Ok(());
        }

        let storage_key = self.storage_key(key);
        self.client.set_with_expiry(&storage_key, "1", ttl).await?;
        debug!(ttl_seconds = ttl, "Revocation entry written");
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.client.exists(&self.storage_key(key)).await?)
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(self.client.health_check().await?)
    }
}
