use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::web::Data;
use actix_web::{Error as ActixError, HttpMessage};
use std::future::{ready, Future, Ready};
use std::pin::Pin;

use crate::core::auth::{AdminSession, Gatekeeper, PasswordDigest};
use crate::error::Error;
use crate::impls::tokener::jwt::JWT;

pub static ADMIN_TOKEN: &str = "ADMIN_TOKEN";

/// The gatekeeper the server runs with, shared as app data.
pub type AdminGate = Gatekeeper<PasswordDigest, JWT>;

/// Lets a request through only when it carries a valid admin session token,
/// either as a bearer token or in the `ADMIN_TOKEN` cookie.
pub struct AdminGuard;

impl<S, B> Transform<S, ServiceRequest> for AdminGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = ActixError;
    type Transform = AdminGuardService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AdminGuardService { next_service: service }))
    }
}

pub struct AdminGuardService<S> {
    next_service: S,
}

impl<S, B> Service<ServiceRequest> for AdminGuardService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = ActixError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(&self, ctx: &mut std::task::Context<'_>) -> std::task::Poll<Result<(), Self::Error>> {
        self.next_service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match authenticate(&req) {
            Ok(session) => {
                req.extensions_mut().insert(session);
            }
            Err(e) => {
                let res = req.error_response(e).map_into_right_body();
                return Box::pin(async move { Ok(res) });
            }
        }
        let res_fut = self.next_service.call(req);
        Box::pin(async move {
            let resp = res_fut.await?;
            Ok(resp.map_into_left_body())
        })
    }
}

fn session_token(req: &ServiceRequest) -> Option<String> {
    let bearer = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().split_once(' '))
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
        .map(|(_, token)| token.trim().to_owned())
        .filter(|token| !token.is_empty());
    bearer.or_else(|| req.cookie(ADMIN_TOKEN).map(|c| c.value().to_owned()))
}

fn authenticate(req: &ServiceRequest) -> Result<AdminSession, Error> {
    let gate = req
        .app_data::<Data<AdminGate>>()
        .ok_or_else(|| Error::Configuration("admin sessions are not configured".into()))?;
    let token = session_token(req).ok_or(Error::Unauthorized)?;
    gate.authenticate(&token)
}
