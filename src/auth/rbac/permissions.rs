//! Permission checking methods

use crate::core::models::user::UserRole;
use std::collections::HashSet;
use tracing::debug;

use super::helpers::RbacHelpers;
use super::system::RbacSystem;
use super::types::{Conditions, Permission, PermissionCheck, PermissionContext};

impl RbacSystem {
    /// Whether `role` may perform `action` on `resource`.
    ///
    /// Unknown roles are denied and `super_admin` is always granted, whatever the matrix
    /// says. Otherwise any matching grant of the role or of the roles it inherits from
    /// grants access.
    pub fn has_permission(
        &self,
        role: &str,
        resource: &str,
        action: &str,
        context: Option<&PermissionContext>,
    ) -> bool {
        self.check_permission_detailed(role, resource, action, context)
            .granted
    }

    /// Same decision as [`RbacSystem::has_permission`], with the matching grant or the
    /// reason for denial
    pub fn check_permission_detailed(
        &self,
        role: &str,
        resource: &str,
        action: &str,
        context: Option<&PermissionContext>,
    ) -> PermissionCheck {
        let denied = |reason: String| PermissionCheck {
            granted: false,
            role: role.to_string(),
            granted_by: None,
            denial_reason: Some(reason),
        };

        let Ok(parsed) = role.parse::<UserRole>() else {
            debug!("Permission check for unknown role {}", role);
            return denied(format!("Unknown role: {}", role));
        };

        if parsed == UserRole::SuperAdmin {
            return PermissionCheck {
                granted: true,
                role: role.to_string(),
                granted_by: Some(Permission::all().name()),
                denial_reason: None,
            };
        }

        let source = self.grant_source();
        let mut visited = HashSet::new();
        match self.find_grant(parsed, resource, action, context, &source, &mut visited) {
            Some(found) => {
                debug!(
                    "Granted {}.{} to {} via {}",
                    resource, action, role, found
                );
                PermissionCheck {
                    granted: true,
                    role: role.to_string(),
                    granted_by: Some(found.name()),
                    denial_reason: None,
                }
            }
            None => {
                debug!("Denied {}.{} to {}", resource, action, role);
                denied(format!("Missing permission: {}.{}", resource, action))
            }
        }
    }

    /// Whether a single grant covers the request
    pub(super) fn grant_matches(
        grant: &Permission,
        resource: &str,
        action: &str,
        context: Option<&PermissionContext>,
    ) -> bool {
        if grant.resource == "*" {
            return true;
        }
        if grant.resource != resource {
            return false;
        }
        if grant.action == "*" {
            return true;
        }
        grant.action == action && Self::conditions_match(&grant.conditions, context)
    }

    /// Every condition must be present in the context with an identical value.
    /// Empty conditions always match; non-empty ones never match an absent context.
    pub fn conditions_match(conditions: &Conditions, context: Option<&PermissionContext>) -> bool {
        if conditions.is_empty() {
            return true;
        }
        let Some(context) = context else {
            return false;
        };
        conditions
            .iter()
            .all(|(key, expected)| context.get(key) == Some(expected))
    }

    /// Effective grants of a role, own first, then inherited
    pub fn get_role_permissions(&self, role: &str) -> Vec<Permission> {
        let Ok(role) = role.parse::<UserRole>() else {
            return Vec::new();
        };
        let source = self.grant_source();
        let mut visited = HashSet::new();
        let mut permissions = Vec::new();
        self.collect_permissions(role, &source, &mut visited, &mut permissions);
        if role == UserRole::SuperAdmin && !permissions.contains(&Permission::all()) {
            permissions.insert(0, Permission::all());
        }
        permissions
    }

    /// Keep the items `role` may act on, preserving order
    pub fn filter_by_permissions<T>(
        &self,
        items: Vec<T>,
        role: &str,
        resource: &str,
        action: &str,
    ) -> Vec<T> {
        self.filter_by_permissions_with(items, role, resource, action, |_| None)
    }

    /// Like [`RbacSystem::filter_by_permissions`], evaluating each item under the
    /// context returned by `context_fn`
    pub fn filter_by_permissions_with<T, F>(
        &self,
        items: Vec<T>,
        role: &str,
        resource: &str,
        action: &str,
        context_fn: F,
    ) -> Vec<T>
    where
        F: Fn(&T) -> Option<PermissionContext>,
    {
        items
            .into_iter()
            .filter(|item| {
                let context = context_fn(item);
                self.has_permission(role, resource, action, context.as_ref())
            })
            .collect()
    }
}
