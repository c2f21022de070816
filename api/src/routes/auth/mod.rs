//! Authentication route handlers
//!
//! - Registration
//! - Login with identifier and secret
//! - Token refresh
//! - Logout
//! - Access token verification for downstream services

pub mod login;
pub mod logout;
pub mod refresh;
pub mod register;
pub mod verify;
