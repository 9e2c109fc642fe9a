//! Helper functions for creating specific error types

use super::types::AccademiaError;

impl AccademiaError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn already_exists<S: Into<String>>(message: S) -> Self {
        Self::AlreadyExists(message.into())
    }

    pub fn permission_denied<R, A, S>(resource: R, action: A, role: S) -> Self
    where
        R: Into<String>,
        A: Into<String>,
        S: Into<String>,
    {
        Self::PermissionDenied {
            resource: resource.into(),
            action: action.into(),
            role: role.into(),
        }
    }

    pub fn protected<S: Into<String>>(message: S) -> Self {
        Self::Protected(message.into())
    }

    pub fn conflict<S: Into<String>>(message: S) -> Self {
        Self::Conflict(message.into())
    }

    pub fn persistence_unavailable<S: Into<String>>(message: S) -> Self {
        Self::PersistenceUnavailable(message.into())
    }

    pub fn timeout<S: Into<String>>(message: S) -> Self {
        Self::Timeout(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    pub fn crypto<S: Into<String>>(message: S) -> Self {
        Self::Crypto(message.into())
    }

    /// Whether this error came from the storage side rather than from the caller
    pub fn is_persistence_failure(&self) -> bool {
        matches!(
            self,
            Self::Database(_) | Self::PersistenceUnavailable(_) | Self::Timeout(_) | Self::Io(_)
        )
    }
}
