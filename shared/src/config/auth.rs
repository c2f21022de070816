//! Token signing configuration

use serde::{Deserialize, Serialize};

/// JWT configuration for the token issuer and validator
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Algorithm identifier (e.g. "RS256", "ES256", "HS256")
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Path to the PEM-encoded private signing key (asymmetric algorithms)
    pub private_key_path: String,

    /// Path to the PEM-encoded public verification key (asymmetric algorithms)
    pub public_key_path: String,

    /// Shared secret for HMAC algorithms
    #[serde(default)]
    pub secret: Option<String>,

    /// Access token lifetime in minutes
    pub access_token_expire_minutes: i64,

    /// Refresh token lifetime in days
    pub refresh_token_expire_days: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    pub audience: String,

    /// Accepted clock skew when checking `exp`, in seconds
    #[serde(default)]
    pub leeway_seconds: u64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            algorithm: default_algorithm(),
            private_key_path: String::from("keys/jwt_private.pem"),
            public_key_path: String::from("keys/jwt_public.pem"),
            secret: None,
            access_token_expire_minutes: 15,
            refresh_token_expire_days: 7,
            issuer: String::from("sessionguard"),
            audience: String::from("sessionguard-api"),
            leeway_seconds: 0,
        }
    }
}

impl JwtConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            algorithm: std::env::var("JWT_ALGORITHM").unwrap_or(defaults.algorithm),
            private_key_path: std::env::var("JWT_PRIVATE_KEY_PATH")
                .unwrap_or(defaults.private_key_path),
            public_key_path: std::env::var("JWT_PUBLIC_KEY_PATH")
                .unwrap_or(defaults.public_key_path),
            secret: std::env::var("JWT_SECRET").ok(),
            access_token_expire_minutes: std::env::var("JWT_ACCESS_TOKEN_EXPIRE_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.access_token_expire_minutes),
            refresh_token_expire_days: std::env::var("JWT_REFRESH_TOKEN_EXPIRE_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.refresh_token_expire_days),
            issuer: std::env::var("JWT_ISSUER").unwrap_or(defaults.issuer),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or(defaults.audience),
            leeway_seconds: std::env::var("JWT_LEEWAY_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.leeway_seconds),
        }
    }

    /// Configuration for an HMAC-signed issuer, mostly useful in tests
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            algorithm: String::from("HS256"),
            secret: Some(secret.into()),
            ..Default::default()
        }
    }

    /// Set access token lifetime in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expire_minutes = minutes;
        self
    }

    /// Set refresh token lifetime in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expire_days = days;
        self
    }

    /// Access token lifetime in seconds
    pub fn access_token_expiry_seconds(&self) -> i64 {
        self.access_token_expire_minutes * 60
    }

    /// Refresh token lifetime in seconds
    pub fn refresh_token_expiry_seconds(&self) -> i64 {
        self.refresh_token_expire_days * 86_400
    }

    /// Whether the configured algorithm is an HMAC family algorithm
    pub fn is_symmetric(&self) -> bool {
        self.algorithm.to_ascii_uppercase().starts_with("HS")
    }
}

fn default_algorithm() -> String {
    String::from("RS256")
}
