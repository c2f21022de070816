//! Cache module for Redis-backed revocation
//!
//! Provides the Redis connection wrapper and the revocation store adapter
//! built on top of it.

pub mod redis_client;
pub mod revocation_store;


pub use redis_client::RedisClient;
pub use revocation_store::RedisRevocationStore;

// Re-export commonly used types
pub use sg_shared::config::CacheConfig;
