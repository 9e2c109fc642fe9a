//! Role hierarchy table and role comparison

use crate::core::models::user::UserRole;

use super::system::RbacSystem;
use super::types::{ConditionKey, Permission, RoleDefinition};

fn grant(resource: &str, actions: &[&str]) -> Vec<Permission> {
    actions
        .iter()
        .map(|action| Permission::new(resource, *action))
        .collect()
}

fn own(resource: &str, action: &str) -> Permission {
    Permission::new(resource, action).with_condition(ConditionKey::Own, true)
}

/// Built-in role definitions. None of them inherit; `admin` has no `normatives.delete`.
pub fn default_role_definitions() -> Vec<RoleDefinition> {
    let admin = [
        grant("users", &["create", "read", "update", "delete"]),
        grant("normatives", &["create", "read", "update"]),
        grant("documents", &["*"]),
        grant("courses", &["*"]),
        grant("admin_panel", &["access", "users", "normatives"]),
        grant("audit_logs", &["read"]),
    ]
    .concat();

    let operator = [
        grant("normatives", &["read", "create", "update"]),
        grant("documents", &["read", "create", "update"]),
        grant("courses", &["read", "update"]),
        grant("control_center", &["access"]),
        vec![own("profile", "read"), own("profile", "update")],
    ]
    .concat();

    let user = [
        grant("normatives", &["read"]),
        grant("documents", &["read"]),
        grant("courses", &["read"]),
        vec![
            own("progress", "read"),
            own("progress", "update"),
            own("profile", "read"),
            own("profile", "update"),
        ],
    ]
    .concat();

    let guest =
        vec![Permission::new("normatives", "read").with_condition(ConditionKey::Public, true)];

    vec![
        RoleDefinition::new(UserRole::SuperAdmin, vec![Permission::all()]),
        RoleDefinition::new(UserRole::Admin, admin),
        RoleDefinition::new(UserRole::Operator, operator),
        RoleDefinition::new(UserRole::User, user),
        RoleDefinition::new(UserRole::Guest, guest),
    ]
}

impl RbacSystem {
    /// Get role definition by name
    pub fn get_role_definition(&self, role: &str) -> Option<&RoleDefinition> {
        let role: UserRole = role.parse().ok()?;
        self.definitions.get(&role)
    }

    /// Hierarchy level of a role, 0 for unknown roles
    pub fn get_role_level(&self, role: &str) -> i32 {
        role.parse::<UserRole>()
            .map(|role| role.level())
            .unwrap_or(0)
    }

    /// Whether `role` sits strictly above `other` in the hierarchy
    pub fn is_role_higher(&self, role: &str, other: &str) -> bool {
        self.get_role_level(role) > self.get_role_level(other)
    }

    /// Whether `role` is at least as high as `minimum`
    pub fn has_role_level(&self, role: &str, minimum: UserRole) -> bool {
        self.get_role_level(role) >= minimum.level()
    }
}
