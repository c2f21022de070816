//! Token services for JWT management
//!
//! - key material loading for HMAC, RSA, EC and EdDSA algorithms
//! - encoding and decoding of signed claim sets against an injected clock
//! - issuance of access/refresh tokens with configured lifetimes
//! - verification of presented tokens including revocation status

mod codec;
mod config;
mod issuer;
mod key_manager;
mod validator;

#[cfg(test)]
mod tests;

pub use codec::TokenCodec;
pub use config::TokenServiceConfig;
pub use issuer::TokenIssuer;
pub use key_manager::SigningKeys;
pub use validator::TokenValidator;
