//! Role matrix persistence contract

use super::types::RoleMatrixEntry;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Backing store of the role matrix.
///
/// Writes are conditional: `expected_version` must equal the stored version of the row,
/// otherwise the call fails with `Conflict` and changes nothing. A successful write bumps
/// the version and returns the new row.
#[async_trait]
pub trait MatrixPersistence: Send + Sync {
    /// Read every stored entry
    async fn load_role_matrix(&self) -> Result<Vec<RoleMatrixEntry>>;

    /// Add (`granted`) or remove a permission name
    async fn set_permission(
        &self,
        role: &str,
        permission: &str,
        granted: bool,
        expected_version: i64,
    ) -> Result<RoleMatrixEntry>;

    /// Show (`visible`) or hide a section
    async fn set_section_visibility(
        &self,
        role: &str,
        section: &str,
        visible: bool,
        expected_version: i64,
    ) -> Result<RoleMatrixEntry>;

    /// Insert entries whose role has no row yet. Returns the number inserted.
    async fn seed(&self, entries: &[RoleMatrixEntry]) -> Result<usize>;
}
