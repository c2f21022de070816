//! Signing and verification key material for JWT operations

use std::fs;
use std::path::{Path, PathBuf};

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey};
use sg_shared::JwtConfig;

use crate::errors::TokenError;

/// Where the key material came from, kept for diagnostics only
#[derive(Debug, Clone)]
enum KeySource {
    Files { private_key: PathBuf, public_key: PathBuf },
    Memory,
    Secret,
}

/// Key pair (or shared secret) bound to one algorithm
///
/// Loaded once at startup and shared read-only afterwards.
#[derive(Clone)]
pub struct SigningKeys {
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    source: KeySource,
}

impl std::fmt::Debug for SigningKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKeys")
            .field("algorithm", &self.algorithm)
            .field("source", &self.source)
            .finish()
    }
}

impl SigningKeys {
    /// Load a PEM key pair from disk
    ///
    /// # Arguments
    ///
    /// * `algorithm` - An asymmetric algorithm (`RS*`, `PS*`, `ES*` or `EdDSA`)
    /// * `private_key_path` - Path to the PEM-encoded private key file
    /// * `public_key_path` - Path to the PEM-encoded public key file
    ///
    /// # Example
    ///
    /// ```no_run
    /// use jsonwebtoken::Algorithm;
    /// use sg_core::services::token::SigningKeys;
    ///
    /// let keys = SigningKeys::from_pem_files(
    ///     Algorithm::RS256,
    ///     "keys/jwt_private.pem",
    ///     "keys/jwt_public.pem",
    /// ).expect("Failed to load keys");
    /// ```
    pub fn from_pem_files<P: AsRef<Path>>(
        algorithm: Algorithm,
        private_key_path: P,
        public_key_path: P,
    ) -> Result<Self, TokenError> {
        let private_key_path = private_key_path.as_ref().to_path_buf();
        let public_key_path = public_key_path.as_ref().to_path_buf();

        let private_key_pem = fs::read(&private_key_path).map_err(|e| TokenError::KeyLoadError {
            message: format!("Failed to read private key {}: {}", private_key_path.display(), e),
        })?;
        let public_key_pem = fs::read(&public_key_path).map_err(|e| TokenError::KeyLoadError {
            message: format!("Failed to read public key {}: {}", public_key_path.display(), e),
        })?;

        let (encoding_key, decoding_key) =
            Self::parse_pem_pair(algorithm, &private_key_pem, &public_key_pem)?;

        Ok(Self {
            algorithm,
            encoding_key,
            decoding_key,
            source: KeySource::Files {
                private_key: private_key_path,
                public_key: public_key_path,
            },
        })
    }

    /// Build from PEM strings (tests or embedded keys)
    pub fn from_pem_strings(
        algorithm: Algorithm,
        private_key_pem: &str,
        public_key_pem: &str,
    ) -> Result<Self, TokenError> {
        let (encoding_key, decoding_key) = Self::parse_pem_pair(
            algorithm,
            private_key_pem.as_bytes(),
            public_key_pem.as_bytes(),
        )?;

        Ok(Self {
            algorithm,
            encoding_key,
            decoding_key,
            source: KeySource::Memory,
        })
    }

    /// Build from an HMAC shared secret
    pub fn from_secret(algorithm: Algorithm, secret: &[u8]) -> Result<Self, TokenError> {
        if !is_hmac(algorithm) {
            return Err(TokenError::KeyLoadError {
                message: format!("{:?} does not use a shared secret", algorithm),
            });
        }
        if secret.is_empty() {
            return Err(TokenError::KeyLoadError {
                message: "JWT secret is empty".to_string(),
            });
        }

        Ok(Self {
            algorithm,
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            source: KeySource::Secret,
        })
    }

    /// Load whatever the configured algorithm needs
    pub fn from_config(config: &JwtConfig, algorithm: Algorithm) -> Result<Self, TokenError> {
        if is_hmac(algorithm) {
            let secret = config.secret.as_deref().ok_or_else(|| TokenError::KeyLoadError {
                message: format!("{:?} requires JWT_SECRET", algorithm),
            })?;
            return Self::from_secret(algorithm, secret.as_bytes());
        }

        Self::from_pem_files(
            algorithm,
            config.private_key_path.as_str(),
            config.public_key_path.as_str(),
        )
    }

    fn parse_pem_pair(
        algorithm: Algorithm,
        private_key_pem: &[u8],
        public_key_pem: &[u8],
    ) -> Result<(EncodingKey, DecodingKey), TokenError> {
        let invalid_private =
            |e: jsonwebtoken::errors::Error| TokenError::KeyLoadError {
                message: format!("Invalid private key format: {}", e),
            };
        let invalid_public =
            |e: jsonwebtoken::errors::Error| TokenError::KeyLoadError {
                message: format!("Invalid public key format: {}", e),
            };

        match algorithm {
            Algorithm::RS256
            | Algorithm::RS384
            | Algorithm::RS512
            | Algorithm::PS256
            | Algorithm::PS384
            | Algorithm::PS512 => Ok((
                EncodingKey::from_rsa_pem(private_key_pem).map_err(invalid_private)?,
                DecodingKey::from_rsa_pem(public_key_pem).map_err(invalid_public)?,
            )),
            Algorithm::ES256 | Algorithm::ES384 => Ok((
                EncodingKey::from_ec_pem(private_key_pem).map_err(invalid_private)?,
                DecodingKey::from_ec_pem(public_key_pem).map_err(invalid_public)?,
            )),
            Algorithm::EdDSA => Ok((
                EncodingKey::from_ed_pem(private_key_pem).map_err(invalid_private)?,
                DecodingKey::from_ed_pem(public_key_pem).map_err(invalid_public)?,
            )),
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => {
                Err(TokenError::KeyLoadError {
                    message: format!("{:?} uses a shared secret, not a PEM key pair", algorithm),
                })
            }
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Private and public key paths when the keys were read from disk
    pub fn key_files(&self) -> Option<(&Path, &Path)> {
        match &self.source {
            KeySource::Files {
                private_key,
                public_key,
            } => Some((private_key.as_path(), public_key.as_path())),
            KeySource::Memory | KeySource::Secret => None,
        }
    }

    /// Returns the encoding key for signing JWTs
    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding_key
    }

    /// Returns the decoding key for verifying JWTs
    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }
}

fn is_hmac(algorithm: Algorithm) -> bool {
    matches!(algorithm, Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512)
}
