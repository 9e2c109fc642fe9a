//! Security-aware logging utilities

use tracing::{debug, info, warn};
use uuid::Uuid;

const MAX_USER_AGENT_LEN: usize = 200;

/// Security-aware logging utilities
pub struct SecurityLogger;

impl SecurityLogger {
    /// Log authentication events. Emails are never logged in full.
    pub fn log_auth_event(
        event_type: &str,
        user_id: Option<Uuid>,
        email: Option<&str>,
        success: bool,
        details: Option<&str>,
    ) {
        let email = email.map(mask_email);
        if success {
            info!(
                target: "security",
                event_type,
                user_id = ?user_id,
                email = email.as_deref(),
                details,
                "Authentication success: {}",
                event_type
            );
        } else {
            warn!(
                target: "security",
                event_type,
                user_id = ?user_id,
                email = email.as_deref(),
                details,
                "Authentication failure: {}",
                event_type
            );
        }
    }

    /// Log authorization decisions
    pub fn log_authz_event(
        user_id: Option<Uuid>,
        role: Option<&str>,
        resource: &str,
        action: &str,
        granted: bool,
        reason: Option<&str>,
    ) {
        if granted {
            debug!(
                target: "security",
                user_id = ?user_id,
                role,
                resource,
                action,
                "Authorization granted: {} on {}",
                action,
                resource
            );
        } else {
            warn!(
                target: "security",
                user_id = ?user_id,
                role,
                resource,
                action,
                reason,
                "Authorization denied: {} on {}",
                action,
                resource
            );
        }
    }

    /// Truncate a user agent to prevent log injection
    pub fn sanitize_user_agent(user_agent: &str) -> String {
        user_agent
            .chars()
            .filter(|c| !c.is_control())
            .take(MAX_USER_AGENT_LEN)
            .collect()
    }
}

/// `mario.rossi@example.it` -> `ma***@example.it`
fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let visible: String = local.chars().take(2).collect();
            format!("{}***@{}", visible, domain)
        }
        None => "***".to_string(),
    }
}
