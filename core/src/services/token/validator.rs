//! Token verification against signature, type and revocation

use std::sync::Arc;

use sg_shared::config::OPS_TARGET;
use tracing::{debug, error};

use crate::domain::entities::token::{Claims, TokenKind};
use crate::errors::{DomainError, TokenError};
use crate::repositories::RevocationStore;

use super::codec::TokenCodec;

/// The authorization check other services rely on
///
/// Checks run in a fixed order: structure and signature, then expiry, then
/// token kind, then revocation. The store is only consulted for tokens that
/// passed everything else, and a store failure denies the request.
pub struct TokenValidator<S: RevocationStore + ?Sized> {
    codec: Arc<TokenCodec>,
    store: Arc<S>,
}

impl<S: RevocationStore + ?Sized> TokenValidator<S> {
    pub fn new(codec: Arc<TokenCodec>, store: Arc<S>) -> Self {
        Self { codec, store }
    }

    pub fn codec(&self) -> &Arc<TokenCodec> {
        &self.codec
    }

    /// Verify `token` and return its subject
    pub async fn verify(&self, token: &str, expected_kind: TokenKind) -> Result<String, DomainError> {
        self.inspect(token, expected_kind).await.map(|claims| claims.sub)
    }

    /// Verify `token` and return all of its claims
    pub async fn inspect(&self, token: &str, expected_kind: TokenKind) -> Result<Claims, DomainError> {
        let claims = self.codec.decode(token)?;

        if claims.kind != expected_kind {
            debug!(expected = %expected_kind, actual = %claims.kind, "Token kind mismatch");
            return Err(TokenError::WrongTokenType {
                expected: expected_kind,
                actual: claims.kind,
            }
            .into());
        }

        let revoked = self.store.exists(token).await.map_err(|e| {
            error!(target: OPS_TARGET, error = %e, "Revocation lookup failed, denying token");
            DomainError::from(e)
        })?;
        if revoked {
            debug!(jti = %claims.jti, "Revoked token presented");
            return Err(TokenError::Revoked.into());
        }

        Ok(claims)
    }
}
