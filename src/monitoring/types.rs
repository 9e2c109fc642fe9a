//! Notice types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Notice severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeSeverity {
    Info,
    Warning,
    Error,
}

impl std::fmt::Display for NoticeSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoticeSeverity::Info => write!(f, "INFO"),
            NoticeSeverity::Warning => write!(f, "WARNING"),
            NoticeSeverity::Error => write!(f, "ERROR"),
        }
    }
}

/// What a notice is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeCategory {
    /// A permission-checked operation was refused
    PermissionDenied,
    /// An audit entry could not be written
    AuditFailure,
    /// The role matrix was changed
    MatrixChanged,
    /// The role matrix could not be read or written
    MatrixUnavailable,
}

impl NoticeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeCategory::PermissionDenied => "permission_denied",
            NoticeCategory::AuditFailure => "audit_failure",
            NoticeCategory::MatrixChanged => "matrix_changed",
            NoticeCategory::MatrixUnavailable => "matrix_unavailable",
        }
    }
}

/// Notice information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub category: NoticeCategory,
    pub severity: NoticeSeverity,
    pub message: String,
    pub metadata: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

impl Notice {
    pub fn new<S: Into<String>>(
        category: NoticeCategory,
        severity: NoticeSeverity,
        message: S,
    ) -> Self {
        Self {
            category,
            severity,
            message: message.into(),
            metadata: serde_json::Value::Object(Default::default()),
            timestamp: Utc::now(),
        }
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = metadata;
        self
    }
}
