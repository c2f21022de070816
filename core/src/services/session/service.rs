//! Main session controller implementation

use std::sync::Arc;

use chrono::Duration;
use sg_shared::config::OPS_TARGET;
use sg_shared::validation::{is_valid_email, mask_identifier, MAX_SECRET_LENGTH, MIN_SECRET_LENGTH};
use tracing::{error, info, warn};

use crate::clock::Clock;
use crate::domain::entities::login_event::LoginEvent;
use crate::domain::entities::principal::Principal;
use crate::domain::entities::token::{Claims, TokenKind, TokenPair};
use crate::errors::{AuthError, DomainError, DomainResult, TokenError};
use crate::repositories::{RevocationStore, UserDirectory};
use crate::services::token::{TokenIssuer, TokenValidator};

use super::traits::CredentialVerifier;

/// Session controller for registration, login, refresh and logout
///
/// A refresh token is single-use: `refresh` and `logout` both tombstone the
/// presented token in the revocation store until its natural expiry.
pub struct SessionController<V, D, S>
where
    V: CredentialVerifier + ?Sized,
    D: UserDirectory + ?Sized,
    S: RevocationStore + ?Sized,
{
    /// Checks identifier/secret pairs
    verifier: Arc<V>,
    /// Principal records and login history
    directory: Arc<D>,
    /// Mints tokens
    issuer: Arc<TokenIssuer>,
    /// Verifies presented tokens
    validator: Arc<TokenValidator<S>>,
    /// Revocation tombstones
    store: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<V, D, S> SessionController<V, D, S>
where
    V: CredentialVerifier + ?Sized,
    D: UserDirectory + ?Sized,
    S: RevocationStore + ?Sized,
{
    pub fn new(
        verifier: Arc<V>,
        directory: Arc<D>,
        issuer: Arc<TokenIssuer>,
        validator: Arc<TokenValidator<S>>,
        store: Arc<S>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            verifier,
            directory,
            issuer,
            validator,
            store,
            clock,
        }
    }

    pub fn validator(&self) -> &Arc<TokenValidator<S>> {
        &self.validator
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn access_token_lifetime(&self) -> Duration {
        self.issuer.access_lifetime()
    }

    /// Create an active principal with a freshly hashed secret
    ///
    /// Fails with `Validation` for a malformed email or a secret outside the
    /// accepted length, and with `IdentifierTaken` for an email already in use.
    pub async fn register(&self, identifier: &str, secret: &str) -> DomainResult<Principal> {
        let masked = mask_identifier(identifier);
        validate_identifier(identifier)?;
        validate_secret(secret)?;

        if self.directory.find_by_email(identifier).await?.is_some() {
            warn!(identifier = %masked, "Registration rejected: already registered");
            return Err(AuthError::IdentifierTaken.into());
        }

        let credential_hash = self.verifier.hash(secret).await?;
        let mut principal = Principal::new(identifier, credential_hash);
        principal.created_at = self.clock.now();
        self.directory.create(&principal).await?;

        info!(identifier = %masked, principal_id = %principal.id, "Principal registered");
        Ok(principal)
    }

    /// Authenticate a principal and issue a token pair
    ///
    /// Unknown identifiers and wrong secrets both fail with
    /// `InvalidCredentials`. The login event is recorded best-effort: a
    /// directory failure is reported on the `sessionguard::ops` target and
    /// the login still succeeds.
    ///
    /// # Arguments
    ///
    /// * `identifier` - Login identifier (email)
    /// * `secret` - Plain-text secret
    /// * `client_descriptor` - Client description such as the User-Agent
    pub async fn login(
        &self,
        identifier: &str,
        secret: &str,
        client_descriptor: Option<&str>,
    ) -> DomainResult<TokenPair> {
        let masked = mask_identifier(identifier);

        if !is_valid_email(identifier) {
            warn!(identifier = %masked, "Login rejected: malformed identifier");
            return Err(AuthError::InvalidCredentials.into());
        }

        if !self.verifier.verify(identifier, secret).await? {
            warn!(identifier = %masked, "Login rejected: invalid credentials");
            return Err(AuthError::InvalidCredentials.into());
        }

        let principal = match self.directory.find_by_email(identifier).await? {
            Some(principal) => principal,
            None => {
                warn!(identifier = %masked, "Login rejected: no directory record");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !principal.is_active {
            warn!(identifier = %masked, "Login rejected: principal inactive");
            return Err(AuthError::PrincipalInactive.into());
        }

        let pair = self.issuer.issue_pair(&principal.email)?;

        let event = LoginEvent::new(principal.id, client_descriptor, self.clock.now());
        if let Err(e) = self
            .directory
            .record_login(event.principal_id, &event.client_descriptor, event.occurred_at)
            .await
        {
            error!(
                target: OPS_TARGET,
                principal_id = %principal.id,
                client = %event.client_descriptor,
                error = %e,
                "Failed to record login event"
            );
        }

        info!(identifier = %masked, "Login succeeded");
        Ok(pair)
    }

    /// Exchange a refresh token for a new access token
    ///
    /// The presented refresh token is revoked for the rest of its lifetime,
    /// so a second call with the same token fails with `Revoked`.
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<String> {
        let claims = self.validator.inspect(refresh_token, TokenKind::Refresh).await?;
        self.revoke_until_expiry(refresh_token, &claims).await?;

        let access_token = self.issuer.issue_access(&claims.sub)?;
        info!(subject = %mask_identifier(&claims.sub), "Refresh token exchanged");

        Ok(access_token)
    }

    /// Revoke a refresh token
    ///
    /// Fails with `AlreadyRevoked` when the token was revoked before.
    pub async fn logout(&self, refresh_token: &str) -> DomainResult<()> {
        let claims = self
            .validator
            .inspect(refresh_token, TokenKind::Refresh)
            .await
            .map_err(|e| match e {
                DomainError::Token(TokenError::Revoked) => TokenError::AlreadyRevoked.into(),
                other => other,
            })?;
        self.revoke_until_expiry(refresh_token, &claims).await?;

        info!(subject = %mask_identifier(&claims.sub), "Logged out");
        Ok(())
    }

    /// Resolve an access token to an active principal
    pub async fn current_principal(&self, access_token: &str) -> DomainResult<Principal> {
        self.current_session(access_token)
            .await
            .map(|(principal, _)| principal)
    }

    /// Resolve an access token to an active principal and the token's claims
    pub async fn current_session(&self, access_token: &str) -> DomainResult<(Principal, Claims)> {
        let claims = self.validator.inspect(access_token, TokenKind::Access).await?;

        let principal = self
            .directory
            .find_by_email(&claims.sub)
            .await?
            .ok_or(AuthError::PrincipalNotFound)?;

        if !principal.is_active {
            return Err(AuthError::PrincipalInactive.into());
        }

        Ok((principal, claims))
    }

    /// Change the email and/or secret of the token's principal
    ///
    /// Tokens already issued keep the old email as subject, so after an email
    /// change they no longer resolve to a principal.
    pub async fn update_principal(
        &self,
        access_token: &str,
        new_email: Option<&str>,
        new_secret: Option<&str>,
    ) -> DomainResult<Principal> {
        let mut principal = self.current_principal(access_token).await?;
        let previous = mask_identifier(&principal.email);
        let mut email_changed = false;

        if let Some(email) = new_email.filter(|email| *email != principal.email) {
            validate_identifier(email)?;
            if self.directory.find_by_email(email).await?.is_some() {
                warn!(identifier = %mask_identifier(email), "Email change rejected: already registered");
                return Err(AuthError::IdentifierTaken.into());
            }
            principal.email = email.to_string();
            email_changed = true;
        }

        if let Some(secret) = new_secret {
            validate_secret(secret)?;
            principal.credential_hash = self.verifier.hash(secret).await?;
        }

        self.directory.update(&principal).await?;
        info!(
            identifier = %previous,
            email_changed,
            secret_changed = new_secret.is_some(),
            "Principal updated"
        );

        Ok(principal)
    }

    /// Login events of the token's principal, newest first
    pub async fn login_history(
        &self,
        access_token: &str,
        skip: u32,
        limit: u32,
    ) -> DomainResult<Vec<LoginEvent>> {
        let principal = self.current_principal(access_token).await?;
        self.directory.login_history(principal.id, skip, limit).await
    }

    /// Tombstone `token` until its `exp`
    ///
    /// A token accepted only through the expiry leeway has no lifetime left
    /// to cover and is rejected as expired.
    async fn revoke_until_expiry(&self, token: &str, claims: &Claims) -> DomainResult<()> {
        let ttl = claims.remaining_seconds(self.clock.now());
        if ttl <= 0 {
            return Err(TokenError::Expired.into());
        }

        self.store.put(token, ttl).await?;
        Ok(())
    }
}

fn validate_identifier(identifier: &str) -> DomainResult<()> {
    if is_valid_email(identifier) {
        Ok(())
    } else {
        Err(DomainError::Validation {
            message: "Email is not a valid address".to_string(),
        })
    }
}

fn validate_secret(secret: &str) -> DomainResult<()> {
    let length = secret.chars().count();
    if (MIN_SECRET_LENGTH..=MAX_SECRET_LENGTH).contains(&length) {
        Ok(())
    } else {
        Err(DomainError::Validation {
            message: format!(
                "Password must be between {} and {} characters",
                MIN_SECRET_LENGTH, MAX_SECRET_LENGTH
            ),
        })
    }
}
