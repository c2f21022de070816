//! Credential verification adapters

pub mod bcrypt_verifier;


pub use bcrypt_verifier::{hash_secret, BcryptCredentialVerifier};
