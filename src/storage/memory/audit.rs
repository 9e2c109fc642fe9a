//! In-memory audit sink

use crate::auth::audit::{AuditLogEntry, AuditSink};
use crate::utils::error::{AccademiaError, Result};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Default)]
pub struct InMemoryAuditSink {
    entries: RwLock<Vec<AuditLogEntry>>,
    failing: AtomicBool,
}

impl InMemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make appends fail
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// All entries in append order
    pub fn entries(&self) -> Vec<AuditLogEntry> {
        self.entries.read().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[async_trait]
impl AuditSink for InMemoryAuditSink {
    async fn append(&self, entry: &AuditLogEntry) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AccademiaError::persistence_unavailable(
                "In-memory audit sink is failing",
            ));
        }
        self.entries.write().push(entry.clone());
        Ok(())
    }

    async fn recent(&self, limit: u64) -> Result<Vec<AuditLogEntry>> {
        Ok(self
            .entries
            .read()
            .iter()
            .rev()
            .take(limit as usize)
            .cloned()
            .collect())
    }
}
