//! # Infrastructure Layer
//!
//! Concrete adapters for the ports defined in `sg_core`:
//!
//! - **Cache**: Redis client and the Redis-backed revocation store
//! - **Database**: MySQL connection pool and user directory using SQLx
//! - **Credentials**: bcrypt credential verifier over the user directory
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)
//! - `redis-cache`: Enable Redis caching support (default)

// Re-export core types for convenience
pub use sg_core::errors::*;

/// Cache module - Redis client and revocation store
pub mod cache;

/// Credential verification
pub mod credentials;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Configuration re-exports for infrastructure services
pub mod config {
    pub use sg_shared::config::{CacheConfig, DatabaseConfig, RevocationBackend};
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for StoreError {
    fn from(err: InfrastructureError) -> Self {
        StoreError::unavailable(err.to_string())
    }
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Config(message) => DomainError::Configuration { message },
            InfrastructureError::Cache(e) => StoreError::unavailable(e.to_string()).into(),
            other => DomainError::Directory {
                message: other.to_string(),
            },
        }
    }
}
