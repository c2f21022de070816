//! Bearer token authentication
//!
//! [`BearerAuth`] verifies the access token carried in the `Authorization`
//! header through the session controller's validator (signature, expiry,
//! token kind and revocation) and stores an [`AuthContext`] in the request
//! extensions. Rejections use the same JSON error envelope as the handlers.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse, Transform},
    error::{ErrorUnauthorized, InternalError},
    http::header::{HeaderMap, AUTHORIZATION},
    web, Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;

use sg_core::domain::entities::token::TokenKind;
use sg_core::errors::DomainError;

use crate::handlers::error::{handle_domain_error, missing_bearer_response};
use crate::routes::AppState;

/// Authenticated caller attached to the request by [`BearerAuth`]
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Subject of the verified access token
    pub subject: String,
    /// The access token as presented
    pub access_token: String,
}

/// Middleware factory requiring a valid, unrevoked access token
#[derive(Debug, Clone, Copy, Default)]
pub struct BearerAuth;

impl BearerAuth {
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for BearerAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = BearerAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BearerAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct BearerAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for BearerAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let outcome = authenticate(&req).await;

            match outcome {
                Ok(context) => {
                    req.extensions_mut().insert(context);
                    service
                        .call(req)
                        .await
                        .map(ServiceResponse::map_into_left_body)
                }
                Err(response) => Ok(req.into_response(response).map_into_right_body()),
            }
        })
    }
}

async fn authenticate(req: &ServiceRequest) -> Result<AuthContext, HttpResponse> {
    let access_token = extract_bearer_token(req.headers())
        .ok_or_else(missing_bearer_response)?
        .to_string();

    let state = req.app_data::<web::Data<AppState>>().ok_or_else(|| {
        handle_domain_error(DomainError::Configuration {
            message: "Application state is not registered".to_string(),
        })
    })?;

    let subject = state
        .session
        .validator()
        .verify(&access_token, TokenKind::Access)
        .await
        .map_err(handle_domain_error)?;

    Ok(AuthContext {
        subject,
        access_token,
    })
}

/// Token from an `Authorization: Bearer <token>` header
///
/// The scheme is matched case-insensitively; an empty token counts as absent.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();

    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Authentication required"));

        ready(result)
    }
}

/// Raw bearer token for handlers that hand it to the session controller
/// themselves instead of running behind [`BearerAuth`]
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl FromRequest for BearerToken {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result: Result<Self, Self::Error> = extract_bearer_token(req.headers())
            .map(|token| BearerToken(token.to_string()))
            .ok_or_else(|| {
                InternalError::from_response("missing bearer token", missing_bearer_response())
                    .into()
            });

        ready(result)
    }
}
