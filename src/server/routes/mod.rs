//! HTTP route modules
//!
//! This module contains all HTTP route handlers organized by functionality.

pub mod admin;
pub mod auth;
pub mod health;

use actix_web::{HttpRequest, HttpResponse, error::JsonPayloadError, web};

/// Standard API response structure
#[derive(Debug, Clone, serde::Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,
    /// Response data (if successful)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error message (if failed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T>
where
    T: serde::Serialize,
{
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create an error response
    pub fn error(message: String) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message),
        }
    }
}

/// Register every route group
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .configure(health::configure_routes)
        .configure(auth::configure_routes)
        .configure(admin::configure_routes);
}

/// Malformed request bodies get the standard envelope instead of a plain-text 400
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = format!("Invalid request body: {}", err);
    actix_web::error::InternalError::from_response(
        err,
        HttpResponse::BadRequest().json(ApiResponse::<()>::error(message)),
    )
    .into()
}
