//! Error type definitions

use thiserror::Error;

/// Result type alias for Accademia
pub type Result<T> = std::result::Result<T, AccademiaError>;

/// Main error type for Accademia
#[derive(Error, Debug)]
pub enum AccademiaError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Session token encoding errors
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// Crypto errors
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Sign-in failure. Never says which of email or password was wrong.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Sign-up with an email that is already registered
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Raised by the audited execution path when the caller lacks a permission
    #[error("Permission denied: {action} on {resource} for role {role}")]
    PermissionDenied {
        resource: String,
        action: String,
        role: String,
    },

    /// Mutation refused because it would lock a role out of its own surface
    #[error("Protected: {0}")]
    Protected(String),

    /// Concurrent modification detected
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Backing store could not be read or written
    #[error("Persistence unavailable: {0}")]
    PersistenceUnavailable(String),

    /// A bounded operation did not finish in time
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Missing or invalid session
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
