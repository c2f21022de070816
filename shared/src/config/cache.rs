//! Revocation store configuration module

use serde::{Deserialize, Serialize};

/// Scheme prefix selecting the in-process revocation store
pub const MEMORY_SCHEME: &str = "memory://";

/// Backend selected by the configured store URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevocationBackend {
    /// In-process expiring map, suitable for a single instance
    Memory,
    /// Networked Redis server
    Redis,
}

/// Revocation store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Store connection URL (`redis://...` or `memory://`)
    pub url: String,

    /// Connection timeout in seconds
    pub connection_timeout: u64,

    /// Prefix for revocation keys
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,

    /// Connection attempts made at startup before giving up
    #[serde(default = "default_connect_attempts")]
    pub connect_attempts: u32,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: String::from("redis://127.0.0.1:6379"),
            connection_timeout: 5,
            key_prefix: default_key_prefix(),
            connect_attempts: default_connect_attempts(),
        }
    }
}

impl CacheConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let url = std::env::var("REVOCATION_STORE_URL")
            .or_else(|_| std::env::var("REDIS_URL"))
            .unwrap_or(defaults.url);
        let key_prefix = std::env::var("REVOCATION_KEY_PREFIX")
            .unwrap_or(defaults.key_prefix);

        Self {
            url,
            key_prefix,
            ..defaults
        }
    }

    /// Create a new cache configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Which store implementation the URL points at
    pub fn backend(&self) -> RevocationBackend {
        if self.url.starts_with(MEMORY_SCHEME) {
            RevocationBackend::Memory
        } else {
            RevocationBackend::Redis
        }
    }
}

fn default_key_prefix() -> String {
    String::from("sessionguard:revoked")
}

fn default_connect_attempts() -> u32 {
    3
}
