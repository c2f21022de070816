//! Domain entities representing core business objects.

pub mod login_event;
pub mod principal;
pub mod token;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use login_event::{LoginEvent, UNKNOWN_CLIENT};
pub use principal::{Principal, PrincipalId};
pub use token::{Claims, TokenKind, TokenPair, TOKEN_TYPE_BEARER};
