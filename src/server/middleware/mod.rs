//! HTTP middleware implementations
//!
//! Resolves the request credential into an [`crate::auth::AuthContext`] once per request.

mod auth;
mod helpers;


pub use auth::{AuthMiddleware, AuthMiddlewareService, get_auth_context};
pub use helpers::{client_ip, extract_auth_method, is_public_route, user_agent};
