//! In-memory role matrix persistence

use crate::auth::matrix::{MatrixPersistence, RoleMatrixEntry};
use crate::utils::error::{AccademiaError, Result};
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

#[derive(Debug, Default)]
pub struct InMemoryMatrixPersistence {
    rows: RwLock<BTreeMap<String, RoleMatrixEntry>>,
    unavailable: AtomicBool,
    delay_ms: AtomicU64,
}

impl InMemoryMatrixPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing rows
    pub fn with_entries(entries: Vec<RoleMatrixEntry>) -> Self {
        let store = Self::new();
        {
            let mut rows = store.rows.write();
            for entry in entries {
                rows.insert(entry.role.clone(), entry);
            }
        }
        store
    }

    /// Make every call fail as if the backend were down
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Delay every call, to exercise timeouts
    pub fn set_delay(&self, delay: Duration) {
        self.delay_ms
            .store(delay.as_millis() as u64, Ordering::SeqCst);
    }

    /// Stored row of a role
    pub fn row(&self, role: &str) -> Option<RoleMatrixEntry> {
        self.rows.read().get(role).cloned()
    }

    async fn gate(&self) -> Result<()> {
        let delay = self.delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AccademiaError::persistence_unavailable(
                "In-memory matrix backend is unavailable",
            ));
        }
        Ok(())
    }

    fn write_row<F>(&self, role: &str, expected_version: i64, apply: F) -> Result<RoleMatrixEntry>
    where
        F: FnOnce(&mut RoleMatrixEntry),
    {
        let mut rows = self.rows.write();
        let row = rows
            .get_mut(role)
            .ok_or_else(|| AccademiaError::not_found(format!("No matrix row for {}", role)))?;
        if row.version != expected_version {
            return Err(AccademiaError::conflict(format!(
                "Row for {} is at version {}, expected {}",
                role, row.version, expected_version
            )));
        }
        apply(row);
        row.version += 1;
        row.updated_at = Utc::now();
        Ok(row.clone())
    }
}

#[async_trait]
impl MatrixPersistence for InMemoryMatrixPersistence {
    async fn load_role_matrix(&self) -> Result<Vec<RoleMatrixEntry>> {
        self.gate().await?;
        Ok(self.rows.read().values().cloned().collect())
    }

    async fn set_permission(
        &self,
        role: &str,
        permission: &str,
        granted: bool,
        expected_version: i64,
    ) -> Result<RoleMatrixEntry> {
        self.gate().await?;
        self.write_row(role, expected_version, |row| {
            if granted {
                row.permissions.insert(permission.to_string());
            } else {
                row.permissions.remove(permission);
            }
        })
    }

    async fn set_section_visibility(
        &self,
        role: &str,
        section: &str,
        visible: bool,
        expected_version: i64,
    ) -> Result<RoleMatrixEntry> {
        self.gate().await?;
        self.write_row(role, expected_version, |row| {
            if visible {
                row.sections.insert(section.to_string());
            } else {
                row.sections.remove(section);
            }
        })
    }

    async fn seed(&self, entries: &[RoleMatrixEntry]) -> Result<usize> {
        self.gate().await?;
        let mut rows = self.rows.write();
        let mut inserted = 0;
        for entry in entries {
            if !rows.contains_key(&entry.role) {
                rows.insert(entry.role.clone(), entry.clone());
                inserted += 1;
            }
        }
        Ok(inserted)
    }
}
