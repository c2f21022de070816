//! Traits for credential verification and hashing

use async_trait::async_trait;

use crate::errors::DomainError;

/// Confirms that a secret belongs to an identifier
///
/// Unknown identifiers must answer `Ok(false)`, exactly like a wrong secret.
/// `Err` is reserved for backend failures.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, identifier: &str, secret: &str) -> Result<bool, DomainError>;

    /// Produce the credential hash stored for a new or changed secret
    async fn hash(&self, secret: &str) -> Result<String, DomainError>;
}
