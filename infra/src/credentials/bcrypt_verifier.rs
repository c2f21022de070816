//! bcrypt-based credential verifier

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use sg_core::errors::DomainError;
use sg_core::repositories::UserDirectory;
use sg_core::services::CredentialVerifier;
use sg_shared::validation::{mask_identifier, MAX_SECRET_LENGTH, MIN_SECRET_LENGTH};

/// Checks secrets against the bcrypt hash stored in the user directory
///
/// Unknown identifiers are answered with `false` after a dummy hash
/// comparison so response timing does not reveal which identifiers exist.
pub struct BcryptCredentialVerifier<D: UserDirectory + ?Sized> {
    directory: Arc<D>,
    dummy_hash: String,
    cost: u32,
}

impl<D: UserDirectory + ?Sized> BcryptCredentialVerifier<D> {
    pub fn new(directory: Arc<D>) -> Result<Self, DomainError> {
        Self::with_cost(directory, bcrypt::DEFAULT_COST)
    }

    pub fn with_cost(directory: Arc<D>, cost: u32) -> Result<Self, DomainError> {
        let dummy_hash = bcrypt::hash("sessionguard-dummy-secret", cost).map_err(|e| {
            DomainError::Configuration {
                message: format!("bcrypt setup failed: {}", e),
            }
        })?;

        Ok(Self {
            directory,
            dummy_hash,
            cost,
        })
    }
}

/// Hash a secret for storage in the directory
pub fn hash_secret(secret: &str, cost: u32) -> Result<String, DomainError> {
    bcrypt::hash(secret, cost).map_err(|e| DomainError::Internal {
        message: format!("bcrypt hashing failed: {}", e),
    })
}

#[async_trait]
impl<D: UserDirectory + ?Sized> CredentialVerifier for BcryptCredentialVerifier<D> {
    async fn verify(&self, identifier: &str, secret: &str) -> Result<bool, DomainError> {
        let length = secret.chars().count();
        if !(MIN_SECRET_LENGTH..=MAX_SECRET_LENGTH).contains(&length) {
            debug!(identifier = %mask_identifier(identifier), "Secret length out of range");
            return Ok(false);
        }

        let principal = self.directory.find_by_email(identifier).await?;
        let (hash, known) = match &principal {
            Some(p) => (p.credential_hash.clone(), true),
            None => (self.dummy_hash.clone(), false),
        };

        let secret = secret.to_string();
        let matches = tokio::task::spawn_blocking(move || bcrypt::verify(secret, &hash))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("bcrypt task failed: {}", e),
            })?;

        match matches {
            Ok(matches) => Ok(known && matches),
            Err(e) => {
                error!(
                    identifier = %mask_identifier(identifier),
                    error = %e,
                    "Stored credential hash is unreadable"
                );
                Ok(false)
            }
        }
    }

    async fn hash(&self, secret: &str) -> Result<String, DomainError> {
        let secret = secret.to_string();
        let cost = self.cost;
        tokio::task::spawn_blocking(move || hash_secret(&secret, cost))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("bcrypt task failed: {}", e),
            })?
    }
}
