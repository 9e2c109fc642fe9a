//! Request and response models for admin endpoints

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One row of the role matrix as shown to administrators
#[derive(Debug, Clone, Serialize)]
pub struct RoleView {
    pub role: String,
    pub level: i32,
    /// Effective permission names
    pub permissions: Vec<String>,
    pub sections: BTreeSet<String>,
    /// Stored row version, absent when the role is served from defaults
    pub version: Option<i64>,
}

/// Grant or revoke one permission
#[derive(Debug, Clone, Deserialize)]
pub struct PermissionUpdate {
    pub permission: String,
    pub granted: bool,
}

/// Show or hide one section
#[derive(Debug, Clone, Deserialize)]
pub struct SectionUpdate {
    pub section: String,
    pub visible: bool,
}

/// Audit log query
#[derive(Debug, Clone, Deserialize)]
pub struct AuditQuery {
    pub limit: Option<u64>,
}
