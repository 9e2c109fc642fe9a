//! Tests for error handling

use super::types::AccademiaError;
use actix_web::ResponseError;
use actix_web::http::StatusCode;

#[test]
fn test_validation_helper() {
    let error = AccademiaError::validation("Invalid email");
    assert!(matches!(error, AccademiaError::Validation(msg) if msg == "Invalid email"));
}

#[test]
fn test_permission_denied_message_names_resource_and_action() {
    let error = AccademiaError::permission_denied("normatives", "delete", "operator");
    assert_eq!(
        error.to_string(),
        "Permission denied: delete on normatives for role operator"
    );
}

#[test]
fn test_invalid_credentials_is_generic() {
    let error = AccademiaError::InvalidCredentials;
    let message = error.to_string();
    assert!(!message.contains("not found"));
    assert_eq!(message, "Invalid email or password");
}

#[test]
fn test_status_codes() {
    assert_eq!(
        AccademiaError::InvalidCredentials.status_code(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        AccademiaError::permission_denied("users", "read", "guest").status_code(),
        StatusCode::FORBIDDEN
    );
    assert_eq!(
        AccademiaError::protected("superadmin").status_code(),
        StatusCode::FORBIDDEN
    );
    assert_eq!(
        AccademiaError::already_exists("a@b.it").status_code(),
        StatusCode::CONFLICT
    );
    assert_eq!(
        AccademiaError::persistence_unavailable("timeout").status_code(),
        StatusCode::SERVICE_UNAVAILABLE
    );
}

#[test]
fn test_persistence_failure_classification() {
    assert!(AccademiaError::persistence_unavailable("down").is_persistence_failure());
    assert!(!AccademiaError::InvalidCredentials.is_persistence_failure());
    assert!(!AccademiaError::protected("x").is_persistence_failure());
}
