//! Configuration for the token services

use chrono::Duration;
use jsonwebtoken::Algorithm;
use sg_shared::JwtConfig;

use crate::errors::DomainError;

/// Configuration shared by the token codec and issuer
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Access token expiry in minutes
    pub access_token_expiry_minutes: i64,
    /// Refresh token expiry in days
    pub refresh_token_expiry_days: i64,
    /// Value of the `iss` claim
    pub issuer: String,
    /// Value of the `aud` claim
    pub audience: String,
    /// Accepted clock skew when checking `exp`
    pub leeway_seconds: u64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::HS256,
            access_token_expiry_minutes: 15,
            refresh_token_expiry_days: 7,
            issuer: "sessionguard".to_string(),
            audience: "sessionguard-api".to_string(),
            leeway_seconds: 0,
        }
    }
}

impl TokenServiceConfig {
    /// Build from the shared JWT configuration
    pub fn from_jwt_config(config: &JwtConfig) -> Result<Self, DomainError> {
        let algorithm = config
            .algorithm
            .parse::<Algorithm>()
            .map_err(|_| DomainError::Configuration {
                message: format!("Unsupported JWT algorithm: {}", config.algorithm),
            })?;

        let config = Self {
            algorithm,
            access_token_expiry_minutes: config.access_token_expire_minutes,
            refresh_token_expiry_days: config.refresh_token_expire_days,
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            leeway_seconds: config.leeway_seconds,
        };
        config.access_token_lifetime()?;
        config.refresh_token_lifetime()?;

        Ok(config)
    }

    pub fn access_token_lifetime(&self) -> Result<Duration, DomainError> {
        Duration::try_minutes(self.access_token_expiry_minutes).ok_or_else(|| {
            DomainError::Configuration {
                message: format!(
                    "Access token lifetime of {} minutes is out of range",
                    self.access_token_expiry_minutes
                ),
            }
        })
    }

    pub fn refresh_token_lifetime(&self) -> Result<Duration, DomainError> {
        Duration::try_days(self.refresh_token_expiry_days).ok_or_else(|| {
            DomainError::Configuration {
                message: format!(
                    "Refresh token lifetime of {} days is out of range",
                    self.refresh_token_expiry_days
                ),
            }
        })
    }
}
