//! Role matrix store: snapshot plus serialized, version-checked writes

use super::persistence::MatrixPersistence;
use super::types::{RoleMatrix, RoleMatrixEntry};
use crate::auth::rbac::{Permission, SUPERADMIN_SECTION};
use crate::core::models::user::UserRole;
use crate::utils::error::{AccademiaError, Result};
use arc_swap::ArcSwapOption;
use std::collections::BTreeSet;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Holds the loaded role matrix and mediates every change to it.
///
/// Reads are lock-free. Writes are serialized in-process and carry the cached row version,
/// so a concurrent writer elsewhere surfaces as `Conflict` instead of a lost update.
pub struct RoleMatrixStore {
    persistence: Arc<dyn MatrixPersistence>,
    snapshot: ArcSwapOption<RoleMatrix>,
    write_lock: Mutex<()>,
    timeout: Duration,
}

impl RoleMatrixStore {
    /// Create an unloaded store. Until [`RoleMatrixStore::load`] succeeds every
    /// non-super-admin permission check is denied.
    pub fn new(persistence: Arc<dyn MatrixPersistence>, timeout: Duration) -> Self {
        Self {
            persistence,
            snapshot: ArcSwapOption::empty(),
            write_lock: Mutex::new(()),
            timeout,
        }
    }

    /// Current snapshot, `None` until the first successful load
    pub fn snapshot(&self) -> Option<Arc<RoleMatrix>> {
        self.snapshot.load_full()
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot.load().is_some()
    }

    /// Read the matrix from persistence, seeding rows for built-in roles that have none,
    /// and swap it in
    pub async fn load(&self) -> Result<Arc<RoleMatrix>> {
        let _guard = self.write_lock.lock().await;
        self.load_locked().await
    }

    /// Reload the matrix. On failure the previous snapshot stays in place.
    pub async fn refresh(&self) -> Result<Arc<RoleMatrix>> {
        let _guard = self.write_lock.lock().await;
        match self.load_locked().await {
            Ok(matrix) => Ok(matrix),
            Err(e) => {
                warn!(
                    "Role matrix refresh failed, keeping previous snapshot (loaded: {}): {}",
                    self.is_loaded(),
                    e
                );
                Err(e)
            }
        }
    }

    async fn load_locked(&self) -> Result<Arc<RoleMatrix>> {
        let mut entries = self.bounded(self.persistence.load_role_matrix()).await?;

        let missing: Vec<RoleMatrixEntry> = UserRole::ALL
            .into_iter()
            .filter(|role| !entries.iter().any(|entry| entry.role == role.as_str()))
            .map(RoleMatrixEntry::seeded)
            .collect();

        if !missing.is_empty() {
            let inserted = self.bounded(self.persistence.seed(&missing)).await?;
            info!("Seeded {} role matrix entries from the static role table", inserted);
            entries = self.bounded(self.persistence.load_role_matrix()).await?;
        }

        let matrix = Arc::new(RoleMatrix::new(entries));
        self.snapshot.store(Some(matrix.clone()));
        debug!("Role matrix loaded with {} entries", matrix.len());
        Ok(matrix)
    }

    /// Grant or revoke a permission name for a role. A no-op when the role already is in
    /// the requested state.
    pub async fn update_role_permission(
        &self,
        role: &str,
        permission: &str,
        granted: bool,
    ) -> Result<()> {
        let role_kind = parse_role(role)?;
        let name = Permission::parse(permission)?.name();

        if role_kind == UserRole::SuperAdmin && !granted {
            return Err(AccademiaError::protected(format!(
                "Cannot revoke {} from super_admin",
                name
            )));
        }

        let _guard = self.write_lock.lock().await;
        let current = self.current_entry(role_kind)?;

        if current.permissions.contains(&name) == granted {
            debug!("Permission {} already {} for {}", name, state(granted), role);
            return Ok(());
        }

        let write = self
            .persistence
            .set_permission(role_kind.as_str(), &name, granted, current.version);
        self.commit(role_kind, write).await?;

        info!("Permission {} {} for role {}", name, state(granted), role);
        Ok(())
    }

    /// Show or hide a section for a role. A no-op when the role already is in the
    /// requested state.
    pub async fn update_role_section(
        &self,
        role: &str,
        section: &str,
        visible: bool,
    ) -> Result<()> {
        let role_kind = parse_role(role)?;
        let section = section.trim();
        if section.is_empty()
            || !section
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(AccademiaError::validation(format!(
                "Invalid section name: {}",
                section
            )));
        }

        if role_kind == UserRole::SuperAdmin && section == SUPERADMIN_SECTION && !visible {
            return Err(AccademiaError::protected(
                "The superadmin section cannot be hidden from super_admin",
            ));
        }

        let _guard = self.write_lock.lock().await;
        let current = self.current_entry(role_kind)?;

        if current.sections.contains(section) == visible {
            debug!("Section {} already {} for {}", section, shown(visible), role);
            return Ok(());
        }

        let write = self.persistence.set_section_visibility(
            role_kind.as_str(),
            section,
            visible,
            current.version,
        );
        self.commit(role_kind, write).await?;

        info!("Section {} {} for role {}", section, shown(visible), role);
        Ok(())
    }

    /// Sections of a role as currently cached
    pub fn cached_sections(&self, role: &str) -> Option<BTreeSet<String>> {
        self.snapshot()
            .and_then(|matrix| matrix.entry(role).map(|entry| entry.sections.clone()))
    }

    fn current_entry(&self, role: UserRole) -> Result<RoleMatrixEntry> {
        let matrix = self.snapshot().ok_or_else(|| {
            AccademiaError::persistence_unavailable("Role matrix has not been loaded")
        })?;
        matrix
            .entry(role.as_str())
            .cloned()
            .ok_or_else(|| AccademiaError::not_found(format!("No matrix entry for {}", role)))
    }

    /// Run a conditional write and publish its result. On a version conflict the cached
    /// matrix is reloaded so the caller can retry against fresh state.
    async fn commit<F>(&self, role: UserRole, write: F) -> Result<()>
    where
        F: Future<Output = Result<RoleMatrixEntry>>,
    {
        match self.bounded(write).await {
            Ok(entry) => {
                let next = match self.snapshot() {
                    Some(matrix) => matrix.with_entry(entry),
                    None => RoleMatrix::new(vec![entry]),
                };
                self.snapshot.store(Some(Arc::new(next)));
                Ok(())
            }
            Err(AccademiaError::Conflict(message)) => {
                warn!("Concurrent change to role matrix entry {}: {}", role, message);
                if let Err(e) = self.load_locked().await {
                    warn!("Reload after conflict failed: {}", e);
                }
                Err(AccademiaError::Conflict(message))
            }
            Err(e) => Err(e),
        }
    }

    /// Apply the persistence timeout and fold backend failures into
    /// `PersistenceUnavailable`
    async fn bounded<T, F>(&self, operation: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        match tokio::time::timeout(self.timeout, operation).await {
            Err(_) => Err(AccademiaError::persistence_unavailable(format!(
                "Role matrix storage did not answer within {:?}",
                self.timeout
            ))),
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => match e {
                AccademiaError::Conflict(_)
                | AccademiaError::NotFound(_)
                | AccademiaError::Validation(_)
                | AccademiaError::PersistenceUnavailable(_) => Err(e),
                other => Err(AccademiaError::persistence_unavailable(other.to_string())),
            },
        }
    }
}

fn parse_role(role: &str) -> Result<UserRole> {
    role.parse()
        .map_err(|_| AccademiaError::validation(format!("Unknown role: {}", role)))
}

fn state(granted: bool) -> &'static str {
    if granted { "granted" } else { "revoked" }
}

fn shown(visible: bool) -> &'static str {
    if visible { "shown" } else { "hidden" }
}

impl fmt::Debug for RoleMatrixStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoleMatrixStore")
            .field("loaded", &self.is_loaded())
            .field("timeout", &self.timeout)
            .finish()
    }
}
