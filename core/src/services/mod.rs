//! Business services containing the token lifecycle.

pub mod session;
pub mod token;

// Re-export commonly used types
pub use session::{CredentialVerifier, SessionController};
pub use token::{SigningKeys, TokenCodec, TokenIssuer, TokenServiceConfig, TokenValidator};
