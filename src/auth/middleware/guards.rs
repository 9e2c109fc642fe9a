//! Reusable guards

use super::authorizer::Authorizer;
use crate::auth::rbac::PermissionContext;
use crate::auth::types::AuthContext;
use crate::core::models::user::UserRole;
use crate::utils::error::{AccademiaError, Result};
use std::fmt;
use std::sync::Arc;

type Predicate = Arc<dyn Fn(&AuthContext) -> bool + Send + Sync>;

/// A named predicate over the caller
#[derive(Clone)]
pub struct Guard {
    resource: String,
    action: String,
    predicate: Predicate,
}

impl Guard {
    fn new<F>(resource: impl Into<String>, action: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&AuthContext) -> bool + Send + Sync + 'static,
    {
        Self {
            resource: resource.into(),
            action: action.into(),
            predicate: Arc::new(predicate),
        }
    }

    pub fn check(&self, ctx: &AuthContext) -> bool {
        (self.predicate)(ctx)
    }

    /// `Unauthorized` for anonymous callers, `PermissionDenied` for authenticated ones
    pub fn enforce(&self, ctx: &AuthContext) -> Result<()> {
        if self.check(ctx) {
            return Ok(());
        }
        match ctx.role() {
            None => Err(AccademiaError::unauthorized("Authentication required")),
            Some(role) => Err(AccademiaError::permission_denied(
                &self.resource,
                &self.action,
                role,
            )),
        }
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard")
            .field("resource", &self.resource)
            .field("action", &self.action)
            .finish()
    }
}

impl Authorizer {
    /// Passes for any authenticated caller
    pub fn require_auth(&self) -> Guard {
        Guard::new("session", "authenticate", |ctx: &AuthContext| {
            ctx.is_authenticated()
        })
    }

    /// Passes for callers whose role is at least `minimum`
    pub fn require_role(&self, minimum: UserRole) -> Guard {
        let rbac = self.rbac.clone();
        Guard::new("role", minimum.as_str(), move |ctx: &AuthContext| {
            ctx.role()
                .is_some_and(|role| rbac.has_role_level(role, minimum))
        })
    }

    /// Passes for callers holding `resource.action` under `context`
    pub fn require_permission(
        &self,
        resource: &str,
        action: &str,
        context: Option<PermissionContext>,
    ) -> Guard {
        let rbac = self.rbac.clone();
        let (owned_resource, owned_action) = (resource.to_string(), action.to_string());
        Guard::new(resource, action, move |ctx: &AuthContext| {
            ctx.role().is_some_and(|role| {
                rbac.has_permission(role, &owned_resource, &owned_action, context.as_ref())
            })
        })
    }

    /// `admin_panel.<resource>`, or `admin_panel.access` without a resource
    pub fn require_admin_access(&self, resource: Option<&str>) -> Guard {
        self.require_permission("admin_panel", resource.unwrap_or("access"), None)
    }
}
