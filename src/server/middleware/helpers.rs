//! Helper functions for middleware

use crate::auth::AuthMethod;
use actix_web::dev::ServiceRequest;
use actix_web::http::header::{self, HeaderMap};
use std::net::IpAddr;

/// Extract authentication method from headers
pub fn extract_auth_method(headers: &HeaderMap) -> AuthMethod {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    AuthMethod::from_header(value)
}

/// Check if a route is public (doesn't need a resolved caller)
pub fn is_public_route(path: &str) -> bool {
    const PUBLIC_ROUTES: &[&str] = &["/health", "/auth/signup", "/auth/signin"];

    PUBLIC_ROUTES.iter().any(|&route| path == route)
}

/// Client address for audit records.
///
/// The socket peer, unless the peer is one of `trusted_proxies`, in which case the
/// address it forwarded is used.
pub fn client_ip(req: &ServiceRequest, trusted_proxies: &[IpAddr]) -> Option<String> {
    let peer = req.peer_addr().map(|addr| addr.ip());

    match peer {
        Some(ip) if trusted_proxies.contains(&ip) => req
            .connection_info()
            .realip_remote_addr()
            .map(|addr| addr.to_string())
            .or_else(|| Some(ip.to_string())),
        Some(ip) => Some(ip.to_string()),
        None => None,
    }
}

/// Raw User-Agent header
pub fn user_agent(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}
