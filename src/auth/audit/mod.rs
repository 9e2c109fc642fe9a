//! Append-only audit trail of authorization decisions

mod sink;
mod types;

pub use sink::{AuditSink, TracingAuditSink};
pub use types::AuditLogEntry;
