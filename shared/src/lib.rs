//! Shared utilities and common types for the SessionGuard server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures
//! - Identifier validation and masking

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, Environment,
    DatabaseConfig, JwtConfig, CacheConfig,
    ServerConfig, LoggingConfig,
};
pub use errors::{ErrorResponse, IntoErrorResponse, ApiResult, error_codes};
pub use utils::validation;
