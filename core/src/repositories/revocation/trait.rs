//! Revocation store trait defining the interface for revoked token markers.

use async_trait::async_trait;

use crate::errors::StoreError;

/// Key-value store remembering revoked tokens until they expire on their own
///
/// Keys are full encoded tokens. Implementations may hash or prefix them
/// internally, but `exists` must answer for the same string passed to `put`.
///
/// # Contract
/// - `put` with a non-positive TTL stores nothing and succeeds
/// - a key is reported by `exists` from the moment `put` returns until at
///   least `ttl_seconds` have elapsed
/// - every failure to reach the backend is a [`StoreError::Unavailable`]
#[async_trait]
pub trait RevocationStore: Send + Sync {
    /// Mark `key` as revoked for `ttl_seconds`
    ///
    /// Re-putting an existing key overwrites its TTL.
    async fn put(&self, key: &str, ttl_seconds: i64) -> Result<(), StoreError>;

    /// Whether `key` is currently marked as revoked
    async fn exists(&self, key: &str) -> Result<bool, StoreError>;

    /// Check that the backend is reachable
    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}
