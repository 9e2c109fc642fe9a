//! Audit sinks

use super::types::AuditLogEntry;
use crate::utils::error::Result;
use crate::utils::logging::SecurityLogger;
use async_trait::async_trait;

/// Destination of audit entries
#[async_trait]
pub trait AuditSink: Send + Sync {
    /// Append one entry. Entries are never modified afterwards.
    async fn append(&self, entry: &AuditLogEntry) -> Result<()>;

    /// Most recent entries, newest first
    async fn recent(&self, limit: u64) -> Result<Vec<AuditLogEntry>>;
}

/// Sink that only writes entries to the `security` tracing target.
/// Keeps nothing, so `recent` is always empty.
#[derive(Debug, Default, Clone)]
pub struct TracingAuditSink;

#[async_trait]
impl AuditSink for TracingAuditSink {
    async fn append(&self, entry: &AuditLogEntry) -> Result<()> {
        SecurityLogger::log_authz_event(
            entry.user_id,
            entry.role.as_deref(),
            &entry.resource,
            &entry.action,
            entry.granted,
            entry.reason.as_deref(),
        );
        Ok(())
    }

    async fn recent(&self, _limit: u64) -> Result<Vec<AuditLogEntry>> {
        Ok(Vec::new())
    }
}
