//! Request and response bodies

pub mod auth;
pub mod user;

pub use auth::{
    AccessTokenResponse, LoginRequest, LoginResponse, LogoutRequest, LogoutResponse,
    RefreshTokenRequest, RegisterRequest, VerifyResponse,
};
pub use user::{
    HistoryQuery, LoginEventResponse, PrincipalResponse, SessionResponse, UpdatePrincipalRequest,
};
