//! # SessionGuard Core
//!
//! Core token lifecycle logic for the SessionGuard backend.
//! This crate contains domain entities, the token codec, issuer and validator,
//! the session controller, the ports it consumes (credential verifier,
//! user directory, revocation store) and error types.

pub mod clock;
pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use clock::{Clock, ManualClock, SystemClock};
pub use domain::{Claims, LoginEvent, Principal, PrincipalId, TokenKind, TokenPair};
pub use errors::{AuthError, DomainError, DomainResult, StoreError, TokenError};
pub use repositories::{InMemoryRevocationStore, RevocationStore, UserDirectory};
pub use services::{
    CredentialVerifier, SessionController, SigningKeys, TokenCodec, TokenIssuer,
    TokenServiceConfig, TokenValidator,
};
