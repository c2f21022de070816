//! Access and refresh token issuance

use std::sync::Arc;

use chrono::Duration;
use tracing::debug;

use crate::domain::entities::token::{TokenKind, TokenPair};
use crate::errors::{DomainError, TokenError};

use super::codec::TokenCodec;
use super::config::TokenServiceConfig;

/// Mints tokens with the configured lifetimes
///
/// Construction fails unless both lifetimes are positive and the access
/// lifetime is strictly shorter than the refresh lifetime.
pub struct TokenIssuer {
    codec: Arc<TokenCodec>,
    access_lifetime: Duration,
    refresh_lifetime: Duration,
}

impl TokenIssuer {
    pub fn new(codec: Arc<TokenCodec>, config: &TokenServiceConfig) -> Result<Self, DomainError> {
        let access_lifetime = config.access_token_lifetime()?;
        let refresh_lifetime = config.refresh_token_lifetime()?;

        if access_lifetime <= Duration::zero() || refresh_lifetime <= Duration::zero() {
            return Err(DomainError::Configuration {
                message: "Token lifetimes must be positive".to_string(),
            });
        }
        if access_lifetime >= refresh_lifetime {
            return Err(DomainError::Configuration {
                message: format!(
                    "Access token lifetime ({}s) must be shorter than refresh token lifetime ({}s)",
                    access_lifetime.num_seconds(),
                    refresh_lifetime.num_seconds()
                ),
            });
        }

        Ok(Self {
            codec,
            access_lifetime,
            refresh_lifetime,
        })
    }

    pub fn access_lifetime(&self) -> Duration {
        self.access_lifetime
    }

    pub fn refresh_lifetime(&self) -> Duration {
        self.refresh_lifetime
    }

    pub fn issue_access(&self, subject: &str) -> Result<String, TokenError> {
        self.codec.encode(subject, TokenKind::Access, self.access_lifetime)
    }

    pub fn issue_refresh(&self, subject: &str) -> Result<String, TokenError> {
        self.codec.encode(subject, TokenKind::Refresh, self.refresh_lifetime)
    }

    /// Access and refresh token for the same subject
    pub fn issue_pair(&self, subject: &str) -> Result<TokenPair, TokenError> {
        let access_token = self.issue_access(subject)?;
        let refresh_token = self.issue_refresh(subject)?;
        debug!("Issued token pair");

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.access_lifetime.num_seconds(),
            self.refresh_lifetime.num_seconds(),
        ))
    }
}
