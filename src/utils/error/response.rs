//! HTTP response handling for errors

use super::types::AccademiaError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;

impl ResponseError for AccademiaError {
    fn status_code(&self) -> StatusCode {
        self.status_and_code().0
    }

    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code) = self.status_and_code();

        // Storage and internal details stay in the logs
        let message = match self {
            AccademiaError::Database(_) => "Database operation failed".to_string(),
            AccademiaError::Io(_) | AccademiaError::Internal(_) | AccademiaError::Crypto(_) => {
                "Internal server error".to_string()
            }
            AccademiaError::PersistenceUnavailable(_) => "Changes could not be saved".to_string(),
            _ => self.to_string(),
        };

        let error_response = ErrorResponse {
            success: false,
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
            },
        };

        HttpResponse::build(status_code).json(error_response)
    }
}

impl AccademiaError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AccademiaError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR"),
            AccademiaError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
            AccademiaError::Serialization(_) | AccademiaError::Yaml(_) => {
                (StatusCode::BAD_REQUEST, "SERIALIZATION_ERROR")
            }
            AccademiaError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
            AccademiaError::Jwt(_) => (StatusCode::UNAUTHORIZED, "TOKEN_ERROR"),
            AccademiaError::Crypto(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CRYPTO_ERROR"),
            AccademiaError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            AccademiaError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS")
            }
            AccademiaError::AlreadyExists(_) => (StatusCode::CONFLICT, "ALREADY_EXISTS"),
            AccademiaError::PermissionDenied { .. } => {
                (StatusCode::FORBIDDEN, "PERMISSION_DENIED")
            }
            AccademiaError::Protected(_) => (StatusCode::FORBIDDEN, "PROTECTED"),
            AccademiaError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            AccademiaError::PersistenceUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "PERSISTENCE_UNAVAILABLE")
            }
            AccademiaError::Timeout(_) => (StatusCode::GATEWAY_TIMEOUT, "TIMEOUT"),
            AccademiaError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AccademiaError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            AccademiaError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

/// Error response structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Always false, mirrors the success envelope
    pub success: bool,
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
}
