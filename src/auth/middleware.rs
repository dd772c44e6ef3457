use std::{
    future::{ready, Ready},
    rc::Rc,
};

use actix_web::{
    dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::Header,
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use actix_web_httpauth::headers::authorization::{Authorization, Bearer};
use futures::future::LocalBoxFuture;

use crate::{auth::jwt::JwtService, models::domain::session::SessionState};

/// Resolves the request's session state once and stores it in request
/// extensions. Unlike a conventional auth middleware this one never
/// rejects: a missing, malformed, or expired token simply yields an
/// anonymous session, and the access guard decides what to do with it.
pub struct SessionMiddleware;

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct SessionMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for SessionMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let session = resolve_session(&req);
        req.extensions_mut().insert(session);

        let service = Rc::clone(&self.service);
        Box::pin(async move { service.call(req).await })
    }
}

fn resolve_session(req: &ServiceRequest) -> SessionState {
    let Some(jwt_service) = req.app_data::<web::Data<JwtService>>() else {
        return SessionState::anonymous();
    };

    let Ok(auth) = Authorization::<Bearer>::parse(req) else {
        return SessionState::anonymous();
    };

    match jwt_service.validate_token(auth.into_scheme().token()) {
        Ok(claims) => SessionState::signed_in(claims.role),
        Err(_) => SessionState::anonymous(),
    }
}

/// Extractor handing the resolved session to handlers. Defaults to an
/// anonymous session if the middleware is not mounted.
pub struct Session(pub SessionState);

impl FromRequest for Session {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let session = req
            .extensions()
            .get::<SessionState>()
            .copied()
            .unwrap_or_else(SessionState::anonymous);

        ready(Ok(Session(session)))
    }
}
