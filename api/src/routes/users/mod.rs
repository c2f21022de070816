//! Routes for the authenticated principal

pub mod logins;
pub mod me;
pub mod update;
