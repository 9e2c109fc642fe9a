//! Role matrix types

use crate::auth::rbac::{
    Permission, SUPERADMIN_SECTION, default_role_definitions, default_sections,
};
use crate::core::models::user::UserRole;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::warn;

/// Persisted permissions and visible sections of one role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleMatrixEntry {
    /// Role name
    pub role: String,
    /// Granted permission names
    pub permissions: BTreeSet<String>,
    /// Visible section names
    pub sections: BTreeSet<String>,
    /// Incremented on every write, used as a compare-and-swap token
    pub version: i64,
    /// Last write timestamp
    pub updated_at: DateTime<Utc>,
}

impl RoleMatrixEntry {
    /// Entry built from the static role table and the default section map
    pub fn seeded(role: UserRole) -> Self {
        let permissions = default_role_definitions()
            .into_iter()
            .find(|definition| definition.role == role)
            .map(|definition| {
                definition
                    .permissions
                    .iter()
                    .map(Permission::name)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            role: role.as_str().to_string(),
            permissions,
            sections: default_sections(role),
            version: 1,
            updated_at: Utc::now(),
        }
    }

    /// Seed entries for every built-in role
    pub fn seed_all() -> Vec<Self> {
        UserRole::ALL.into_iter().map(Self::seeded).collect()
    }
}

/// Immutable snapshot of the whole matrix with pre-parsed grants
#[derive(Debug, Clone)]
pub struct RoleMatrix {
    entries: BTreeMap<String, RoleMatrixEntry>,
    grants: HashMap<String, Vec<Permission>>,
    loaded_at: DateTime<Utc>,
}

impl RoleMatrix {
    pub fn new(entries: Vec<RoleMatrixEntry>) -> Self {
        let mut matrix = Self {
            entries: BTreeMap::new(),
            grants: HashMap::new(),
            loaded_at: Utc::now(),
        };
        for entry in entries {
            matrix.insert(entry);
        }
        matrix
    }

    fn insert(&mut self, mut entry: RoleMatrixEntry) {
        if entry.role == UserRole::SuperAdmin.as_str()
            && entry.sections.insert(SUPERADMIN_SECTION.to_string())
        {
            warn!(
                "Stored super_admin entry was missing the {} section, restored",
                SUPERADMIN_SECTION
            );
        }

        let grants = entry
            .permissions
            .iter()
            .filter_map(|name| match Permission::parse(name) {
                Ok(permission) => Some(permission),
                Err(e) => {
                    warn!("Ignoring stored permission {} of {}: {}", name, entry.role, e);
                    None
                }
            })
            .collect();
        self.grants.insert(entry.role.clone(), grants);
        self.entries.insert(entry.role.clone(), entry);
    }

    /// Copy of this snapshot with one entry replaced
    pub fn with_entry(&self, entry: RoleMatrixEntry) -> Self {
        let mut next = self.clone();
        next.insert(entry);
        next
    }

    pub fn entry(&self, role: &str) -> Option<&RoleMatrixEntry> {
        self.entries.get(role)
    }

    /// Parsed grants of a role, `None` when the matrix has no entry for it
    pub fn grants(&self, role: &str) -> Option<&[Permission]> {
        self.grants.get(role).map(Vec::as_slice)
    }

    pub fn entries(&self) -> impl Iterator<Item = &RoleMatrixEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}
