//! Authorizer construction and plain checks

use crate::auth::audit::AuditSink;
use crate::auth::rbac::{PermissionContext, RbacSystem};
use crate::auth::types::AuthContext;
use crate::monitoring::NoticeBus;
use std::sync::Arc;

/// Composes session identity with the permission engine
#[derive(Clone)]
pub struct Authorizer {
    pub(super) rbac: Arc<RbacSystem>,
    pub(super) audit: Arc<dyn AuditSink>,
    pub(super) notices: NoticeBus,
}

impl Authorizer {
    pub fn new(rbac: Arc<RbacSystem>, audit: Arc<dyn AuditSink>, notices: NoticeBus) -> Self {
        Self {
            rbac,
            audit,
            notices,
        }
    }

    /// Unaudited permission check for the caller. Anonymous callers are denied.
    pub fn check(
        &self,
        ctx: &AuthContext,
        resource: &str,
        action: &str,
        context: Option<&PermissionContext>,
    ) -> bool {
        ctx.role()
            .is_some_and(|role| self.rbac.has_permission(role, resource, action, context))
    }

    pub fn rbac(&self) -> &Arc<RbacSystem> {
        &self.rbac
    }

    pub fn audit(&self) -> &Arc<dyn AuditSink> {
        &self.audit
    }

    pub fn notices(&self) -> &NoticeBus {
        &self.notices
    }
}

impl std::fmt::Debug for Authorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authorizer")
            .field("rbac", &self.rbac)
            .finish()
    }
}
