//! Audited, permission-checked execution

use super::authorizer::Authorizer;
use crate::auth::audit::AuditLogEntry;
use crate::auth::rbac::{PermissionCheck, PermissionContext};
use crate::auth::types::AuthContext;
use crate::monitoring::{Notice, NoticeCategory, NoticeSeverity};
use crate::utils::error::{AccademiaError, Result};
use crate::utils::logging::SecurityLogger;
use serde_json::{Value, json};
use std::future::Future;
use tracing::{debug, warn};

const ANONYMOUS: &str = "anonymous";

impl Authorizer {
    /// Check `resource.action` for the caller, record exactly one audit entry for the
    /// decision, then run `operation` if it was granted.
    ///
    /// A failed audit write never blocks the operation; it is logged and surfaced as a
    /// notice instead.
    pub async fn execute_with_permission_check<T, F, Fut>(
        &self,
        ctx: &AuthContext,
        resource: &str,
        action: &str,
        operation: F,
        context: Option<&PermissionContext>,
        metadata: Option<Value>,
    ) -> Result<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let check = match ctx.role() {
            Some(role) => self
                .rbac
                .check_permission_detailed(role, resource, action, context),
            None => PermissionCheck {
                granted: false,
                role: ANONYMOUS.to_string(),
                granted_by: None,
                denial_reason: Some("Not authenticated".to_string()),
            },
        };

        let reason = if check.granted {
            check.granted_by.clone()
        } else {
            check.denial_reason.clone()
        };

        let entry = AuditLogEntry::new(action, resource, check.granted)
            .with_user(ctx.user_id(), ctx.role().map(str::to_string))
            .with_reason(reason)
            .with_request_info(
                ctx.ip_address().map(str::to_string),
                ctx.user_agent().map(SecurityLogger::sanitize_user_agent),
            )
            .with_metadata(metadata.unwrap_or(Value::Null));

        self.record(&entry).await;

        if !check.granted {
            self.notices.emit(
                Notice::new(
                    NoticeCategory::PermissionDenied,
                    NoticeSeverity::Warning,
                    format!(
                        "Permission denied: {} on {} for {}",
                        action, resource, check.role
                    ),
                )
                .with_metadata(json!({
                    "resource": resource,
                    "action": action,
                    "role": check.role,
                    "user_id": ctx.user_id(),
                    "audit_id": entry.id,
                })),
            );
            return Err(AccademiaError::permission_denied(resource, action, check.role));
        }

        debug!("Executing {}.{} for {}", resource, action, check.role);
        operation().await
    }

    async fn record(&self, entry: &AuditLogEntry) {
        if let Err(e) = self.audit.append(entry).await {
            warn!("Failed to write audit entry {}: {}", entry.id, e);
            self.notices.emit(
                Notice::new(
                    NoticeCategory::AuditFailure,
                    NoticeSeverity::Error,
                    format!("Audit entry for {}.{} was not written", entry.resource, entry.action),
                )
                .with_metadata(json!({
                    "audit_id": entry.id,
                    "granted": entry.granted,
                    "error": e.to_string(),
                })),
            );
        }
    }
}
