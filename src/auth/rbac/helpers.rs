//! Helper methods for RBAC operations

use std::collections::HashSet;

use crate::core::models::user::UserRole;

use super::system::{GrantSource, RbacSystem};
use super::types::{Permission, PermissionContext};

pub(super) trait RbacHelpers {
    /// First grant of `role` or its ancestors matching the request
    fn find_grant(
        &self,
        role: UserRole,
        resource: &str,
        action: &str,
        context: Option<&PermissionContext>,
        source: &GrantSource,
        visited: &mut HashSet<UserRole>,
    ) -> Option<Permission>;

    /// Own and inherited grants of `role`, deduplicated in discovery order
    fn collect_permissions(
        &self,
        role: UserRole,
        source: &GrantSource,
        visited: &mut HashSet<UserRole>,
        out: &mut Vec<Permission>,
    );
}

impl RbacHelpers for RbacSystem {
    fn find_grant(
        &self,
        role: UserRole,
        resource: &str,
        action: &str,
        context: Option<&PermissionContext>,
        source: &GrantSource,
        visited: &mut HashSet<UserRole>,
    ) -> Option<Permission> {
        if !visited.insert(role) {
            return None;
        }

        if let Some(found) = self
            .direct_grants(role, source)
            .iter()
            .find(|grant| Self::grant_matches(grant, resource, action, context))
        {
            return Some(found.clone());
        }

        for parent in self.parents(role) {
            if let Some(found) =
                self.find_grant(*parent, resource, action, context, source, visited)
            {
                return Some(found);
            }
        }

        None
    }

    fn collect_permissions(
        &self,
        role: UserRole,
        source: &GrantSource,
        visited: &mut HashSet<UserRole>,
        out: &mut Vec<Permission>,
    ) {
        if !visited.insert(role) {
            return;
        }

        for grant in self.direct_grants(role, source) {
            if !out.contains(grant) {
                out.push(grant.clone());
            }
        }

        for parent in self.parents(role) {
            self.collect_permissions(*parent, source, visited, out);
        }
    }
}
