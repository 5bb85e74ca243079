//! Session guard for protected endpoints.
//!
//! Extracts the bearer access token and the optional `refresh_token` body
//! field, runs the authorization gate, and either injects the authorized
//! session into the request or ends the request with the gate's rejection.

use actix_web::{
    body::{BoxBody, MessageBody},
    dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorInternalServerError,
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    ops::Deref,
    rc::Rc,
    sync::Arc,
};
use tracing::debug;

use sg_core::{
    AuthorizationGate, AuthorizedSession, GateRequest, RevocationStore, UserDirectory,
};

use crate::dto::RefreshTokenBody;
use crate::handlers::{error_envelope, handle_rejection};

/// Authorized session injected into request extensions
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthorizedSession);

impl Deref for Authenticated {
    type Target = AuthorizedSession;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Middleware factory wrapping a route with the authorization gate
pub struct SessionGuard<R, U>
where
    R: RevocationStore + ?Sized,
    U: UserDirectory + ?Sized,
{
    gate: Arc<AuthorizationGate<R, U>>,
}

impl<R, U> SessionGuard<R, U>
where
    R: RevocationStore + ?Sized,
    U: UserDirectory + ?Sized,
{
    pub fn new(gate: Arc<AuthorizationGate<R, U>>) -> Self {
        Self { gate }
    }
}

impl<R, U> Clone for SessionGuard<R, U>
where
    R: RevocationStore + ?Sized,
    U: UserDirectory + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            gate: Arc::clone(&self.gate),
        }
    }
}

impl<S, B, R, U> Transform<S, ServiceRequest> for SessionGuard<R, U>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
    R: RevocationStore + ?Sized + 'static,
    U: UserDirectory + ?Sized + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionGuardMiddleware<S, R, U>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionGuardMiddleware {
            service: Rc::new(service),
            gate: Arc::clone(&self.gate),
        }))
    }
}

pub struct SessionGuardMiddleware<S, R, U>
where
    R: RevocationStore + ?Sized,
    U: UserDirectory + ?Sized,
{
    service: Rc<S>,
    gate: Arc<AuthorizationGate<R, U>>,
}

impl<S, B, R, U> Service<ServiceRequest> for SessionGuardMiddleware<S, R, U>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
    R: RevocationStore + ?Sized + 'static,
    U: UserDirectory + ?Sized + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let gate = Arc::clone(&self.gate);

        Box::pin(async move {
            let access_token = extract_bearer_token(&req);
            let refresh_token = match take_refresh_token(&mut req).await {
                Ok(token) => token,
                Err(e) => {
                    let status = e.error_response().status();
                    debug!(error = %e, %status, "request body unreadable");
                    let errors = vec![e.to_string()];
                    return Ok(req.into_response(error_envelope(status, "", errors)));
                }
            };

            let request = GateRequest::new(access_token, refresh_token);
            match gate.authorize(request).await {
                Ok(session) => {
                    debug!(user_id = %session.user.id, "request authorized");
                    req.extensions_mut().insert(Authenticated(session));
                    let res = service.call(req).await?;
                    Ok(res.map_into_boxed_body())
                }
                Err(rejection) => {
                    debug!(%rejection, "request rejected");
                    Ok(req.into_response(handle_rejection(&rejection)))
                }
            }
        })
    }
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Read `refresh_token` from a JSON body, leaving the body readable downstream
///
/// A body the payload limits refuse ends the request with that error.
async fn take_refresh_token(req: &mut ServiceRequest) -> Result<Option<String>, Error> {
    let body = req.extract::<web::Bytes>().await?;

    let refresh_token = if body.is_empty() {
        None
    } else {
        serde_json::from_slice::<RefreshTokenBody>(&body)
            .ok()
            .and_then(|b| b.refresh_token)
    };

    req.set_payload(Payload::from(body));
    Ok(refresh_token)
}

impl FromRequest for Authenticated {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        // Only reachable on a route that is missing the guard
        let result = req
            .extensions()
            .get::<Authenticated>()
            .cloned()
            .ok_or_else(|| ErrorInternalServerError("internal server error"));

        ready(result)
    }
}
