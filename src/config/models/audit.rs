//! Audit log configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Audit log configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Persist audit entries to the database when one is configured.
    /// When false, entries only go to the tracing output.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Default and maximum number of entries returned by a recent-entries query
    #[serde(default = "default_recent_limit")]
    pub recent_limit: u64,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            recent_limit: default_recent_limit(),
        }
    }
}
