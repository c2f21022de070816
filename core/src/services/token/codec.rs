//! JWT encoding and decoding

use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Header, Validation};
use sg_shared::config::OPS_TARGET;
use tracing::{debug, error};

use crate::clock::Clock;
use crate::domain::entities::token::{Claims, TokenKind};
use crate::errors::TokenError;

use super::config::TokenServiceConfig;
use super::key_manager::SigningKeys;

/// Signs and verifies claim sets with one configured algorithm
///
/// Expiry is checked against the injected [`Clock`] rather than the system
/// time, so the library's own `exp` validation is turned off.
pub struct TokenCodec {
    keys: Arc<SigningKeys>,
    validation: Validation,
    issuer: String,
    audience: String,
    leeway_seconds: i64,
    clock: Arc<dyn Clock>,
}

impl TokenCodec {
    pub fn new(keys: Arc<SigningKeys>, config: &TokenServiceConfig, clock: Arc<dyn Clock>) -> Self {
        let mut validation = Validation::new(keys.algorithm());
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.set_required_spec_claims(&["exp", "iat", "sub", "iss", "aud"]);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(&[config.audience.as_str()]);

        Self {
            keys,
            validation,
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            leeway_seconds: i64::try_from(config.leeway_seconds).unwrap_or(i64::MAX),
            clock,
        }
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Sign a new claim set issued now and valid for `lifetime`
    pub fn encode(&self, subject: &str, kind: TokenKind, lifetime: Duration) -> Result<String, TokenError> {
        let claims = Claims::new(
            subject,
            kind,
            self.clock.now(),
            lifetime,
            self.issuer.as_str(),
            self.audience.as_str(),
        );
        self.encode_claims(&claims)
    }

    /// Sign an already built claim set
    pub fn encode_claims(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.keys.algorithm());

        encode(&header, claims, self.keys.encoding_key()).map_err(|e| {
            error!(
                target: OPS_TARGET,
                algorithm = ?self.keys.algorithm(),
                error = %e,
                "JWT signing failed"
            );
            TokenError::EncodingFailed
        })
    }

    /// Verify signature, algorithm, issuer, audience and expiry
    ///
    /// # Errors
    ///
    /// * `Malformed` - not a JWT, or the claims do not deserialize
    /// * `InvalidSignature` - wrong key, foreign algorithm, issuer or audience
    /// * `Expired` - `exp` (plus leeway) has been reached
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, self.keys.decoding_key(), &self.validation)
            .map_err(|e| {
                debug!(error = %e, "JWT rejected");
                map_decode_error(e.kind())
            })?;

        let claims = data.claims;
        let now = self.clock.now().timestamp();
        if now >= claims.exp.saturating_add(self.leeway_seconds) {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

fn map_decode_error(kind: &ErrorKind) -> TokenError {
    match kind {
        ErrorKind::InvalidToken
        | ErrorKind::Base64(_)
        | ErrorKind::Json(_)
        | ErrorKind::Utf8(_)
        | ErrorKind::MissingRequiredClaim(_) => TokenError::Malformed,
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::InvalidSignature,
    }
}
