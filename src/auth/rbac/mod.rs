//! Role-Based Access Control (RBAC) system
//!
//! The role hierarchy table, permission grammar and the resolution engine that answers
//! "may this role perform this action on this resource".

mod helpers;
mod permissions;
mod roles;
mod sections;
mod system;
#[cfg(test)]
mod tests;
mod types;

pub use roles::default_role_definitions;
pub use sections::{KNOWN_SECTIONS, SUPERADMIN_SECTION, default_sections};
pub use system::RbacSystem;
pub use types::{
    ConditionKey, Conditions, Permission, PermissionCheck, PermissionContext, RoleDefinition,
};
