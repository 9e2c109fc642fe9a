//! RBAC system core functionality

use crate::auth::matrix::{RoleMatrix, RoleMatrixStore};
use crate::core::models::user::UserRole;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

use super::roles::default_role_definitions;
use super::sections::default_sections;
use super::types::{Permission, RoleDefinition};

/// Permission resolution engine
///
/// Checks are synchronous reads over the current matrix snapshot. Without an attached
/// matrix the static role table is authoritative.
#[derive(Clone)]
pub struct RbacSystem {
    /// Role definitions
    pub(super) definitions: HashMap<UserRole, RoleDefinition>,
    /// Runtime-editable role matrix
    pub(super) matrix: Option<Arc<RoleMatrixStore>>,
}

/// Where the grants of a check come from
pub(super) enum GrantSource {
    /// Static role table only
    Static,
    /// Loaded matrix, static table for roles it does not list
    Matrix(Arc<RoleMatrix>),
    /// A matrix is attached but nothing could be loaded
    Unavailable,
}

impl RbacSystem {
    /// Create an engine over the built-in role table
    pub fn new() -> Self {
        Self::with_definitions(default_role_definitions())
    }

    /// Create an engine over custom role definitions
    pub fn with_definitions(definitions: Vec<RoleDefinition>) -> Self {
        let definitions: HashMap<UserRole, RoleDefinition> = definitions
            .into_iter()
            .map(|definition| (definition.role, definition))
            .collect();
        debug!("RBAC system built with {} role definitions", definitions.len());
        Self {
            definitions,
            matrix: None,
        }
    }

    /// Attach the runtime role matrix
    pub fn with_matrix(mut self, matrix: Arc<RoleMatrixStore>) -> Self {
        info!("RBAC system attached to role matrix store");
        self.matrix = Some(matrix);
        self
    }

    /// The attached matrix store, if any
    pub fn matrix(&self) -> Option<&Arc<RoleMatrixStore>> {
        self.matrix.as_ref()
    }

    pub(super) fn grant_source(&self) -> GrantSource {
        match &self.matrix {
            None => GrantSource::Static,
            Some(store) => match store.snapshot() {
                Some(snapshot) => GrantSource::Matrix(snapshot),
                None => GrantSource::Unavailable,
            },
        }
    }

    /// Grants held directly by `role`, before inheritance
    pub(super) fn direct_grants<'a>(
        &'a self,
        role: UserRole,
        source: &'a GrantSource,
    ) -> &'a [Permission] {
        let from_table = || {
            self.definitions
                .get(&role)
                .map(|definition| definition.permissions.as_slice())
                .unwrap_or(&[])
        };
        match source {
            GrantSource::Static => from_table(),
            GrantSource::Matrix(snapshot) => {
                snapshot.grants(role.as_str()).unwrap_or_else(from_table)
            }
            GrantSource::Unavailable => &[],
        }
    }

    pub(super) fn parents(&self, role: UserRole) -> &[UserRole] {
        self.definitions
            .get(&role)
            .map(|definition| definition.inherits_from.as_slice())
            .unwrap_or(&[])
    }

    /// Sections visible to `role`. Unknown roles see nothing.
    pub fn visible_sections(&self, role: &str) -> BTreeSet<String> {
        let Ok(role) = role.parse::<UserRole>() else {
            return BTreeSet::new();
        };
        match self.grant_source() {
            GrantSource::Static => default_sections(role),
            GrantSource::Matrix(snapshot) => snapshot
                .entry(role.as_str())
                .map(|entry| entry.sections.clone())
                .unwrap_or_else(|| default_sections(role)),
            GrantSource::Unavailable if role == UserRole::SuperAdmin => default_sections(role),
            GrantSource::Unavailable => BTreeSet::new(),
        }
    }

    /// Whether `role` can see `section`
    pub fn can_view_section(&self, role: &str, section: &str) -> bool {
        self.visible_sections(role).contains(section)
    }
}

impl Default for RbacSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RbacSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RbacSystem")
            .field("roles", &self.definitions.len())
            .field("matrix_attached", &self.matrix.is_some())
            .finish()
    }
}
