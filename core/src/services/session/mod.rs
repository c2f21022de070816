//! Session controller module
//!
//! Orchestrates login, refresh and logout on top of the token services,
//! and resolves bearer tokens back to directory principals.

mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use service::SessionController;
pub use traits::CredentialVerifier;
