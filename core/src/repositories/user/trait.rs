//! User directory trait defining the interface for principal lookups.
//!
//! The directory owns principal records and the append-only login history.
//! Login identifiers are unique across principals.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::login_event::LoginEvent;
use crate::domain::entities::principal::{Principal, PrincipalId};
use crate::errors::DomainError;

/// Lookup of principals by identifier
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use chrono::{DateTime, Utc};
/// use sg_core::repositories::UserDirectory;
/// use sg_core::domain::entities::{LoginEvent, Principal, PrincipalId};
/// use sg_core::errors::DomainError;
///
/// struct EmptyDirectory;
///
/// #[async_trait]
/// impl UserDirectory for EmptyDirectory {
///     async fn find_by_identifier(&self, _id: PrincipalId) -> Result<Option<Principal>, DomainError> {
///         Ok(None)
///     }
///
///     async fn find_by_email(&self, _email: &str) -> Result<Option<Principal>, DomainError> {
///         Ok(None)
///     }
///
///     async fn create(&self, _principal: &Principal) -> Result<(), DomainError> {
///         Ok(())
///     }
///
///     async fn update(&self, _principal: &Principal) -> Result<(), DomainError> {
///         Ok(())
///     }
///
///     async fn record_login(
///         &self,
///         _principal_id: PrincipalId,
///         _client_descriptor: &str,
///         _occurred_at: DateTime<Utc>,
///     ) -> Result<(), DomainError> {
///         Ok(())
///     }
///
///     async fn login_history(
///         &self,
///         _principal_id: PrincipalId,
///         _skip: u32,
///         _limit: u32,
///     ) -> Result<Vec<LoginEvent>, DomainError> {
///         Ok(Vec::new())
///     }
/// }
/// ```
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Find a principal by record identifier
    ///
    /// # Returns
    /// * `Ok(Some(Principal))` - Principal found
    /// * `Ok(None)` - No principal with this identifier
    /// * `Err(DomainError)` - Backend failure
    async fn find_by_identifier(&self, id: PrincipalId) -> Result<Option<Principal>, DomainError>;

    /// Find a principal by login identifier (the token subject)
    async fn find_by_email(&self, email: &str) -> Result<Option<Principal>, DomainError>;

    /// Store a new principal
    ///
    /// # Returns
    /// * `Err(DomainError::Auth(AuthError::IdentifierTaken))` - The email is already registered
    async fn create(&self, principal: &Principal) -> Result<(), DomainError>;

    /// Overwrite the email, credential hash and active flag of an existing principal
    ///
    /// Fails with `IdentifierTaken` when the new email belongs to another principal.
    async fn update(&self, principal: &Principal) -> Result<(), DomainError>;

    /// Append a login event for a principal
    async fn record_login(
        &self,
        principal_id: PrincipalId,
        client_descriptor: &str,
        occurred_at: DateTime<Utc>,
    ) -> Result<(), DomainError>;

    /// Login events for a principal, newest first
    async fn login_history(
        &self,
        principal_id: PrincipalId,
        skip: u32,
        limit: u32,
    ) -> Result<Vec<LoginEvent>, DomainError>;
}
