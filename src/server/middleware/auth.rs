//! Authentication middleware

use crate::auth::AuthContext;
use crate::server::AppState;
use crate::server::middleware::helpers::{
    client_ip, extract_auth_method, is_public_route, user_agent,
};
use actix_web::dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest, web};
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use tracing::debug;

/// Auth middleware for Actix-web
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

/// Service implementation for auth middleware
pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        if is_public_route(req.path()) {
            return Box::pin(service.call(req));
        }

        let auth_method = extract_auth_method(req.headers());
        let agent = user_agent(req.headers());
        let app_state = req.app_data::<web::Data<AppState>>().cloned();
        let trusted_proxies = app_state
            .as_ref()
            .map(|state| state.config.server.trusted_proxies.as_slice())
            .unwrap_or_default();
        let ip_address = client_ip(&req, trusted_proxies);

        Box::pin(async move {
            let context = match &app_state {
                Some(state) => state.auth.authenticate_method(&auth_method).await,
                None => AuthContext::anonymous(),
            };
            debug!(
                "Request to {} as {}",
                req.path(),
                context.role().unwrap_or("anonymous")
            );

            req.extensions_mut()
                .insert(context.with_request_info(ip_address, agent));
            service.call(req).await
        })
    }
}

/// Caller resolved by [`AuthMiddleware`], anonymous when the middleware did not run
pub fn get_auth_context(req: &HttpRequest) -> AuthContext {
    req.extensions()
        .get::<AuthContext>()
        .cloned()
        .unwrap_or_default()
}

impl FromRequest for AuthContext {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(get_auth_context(req)))
    }
}
