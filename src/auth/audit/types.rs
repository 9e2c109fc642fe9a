//! Audit log entry

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// One authorization decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    /// Acting user, absent for anonymous callers
    pub user_id: Option<Uuid>,
    /// Role of the acting user at decision time
    pub role: Option<String>,
    pub action: String,
    pub resource: String,
    pub granted: bool,
    /// Why access was denied, or which grant allowed it
    pub reason: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    /// Free-form request details, always a JSON object
    pub metadata: Value,
}

impl AuditLogEntry {
    pub fn new<A: Into<String>, R: Into<String>>(action: A, resource: R, granted: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            user_id: None,
            role: None,
            action: action.into(),
            resource: resource.into(),
            granted,
            reason: None,
            ip_address: None,
            user_agent: None,
            metadata: Value::Object(Default::default()),
        }
    }

    pub fn with_user(mut self, user_id: Option<Uuid>, role: Option<String>) -> Self {
        self.user_id = user_id;
        self.role = role;
        self
    }

    pub fn with_reason(mut self, reason: Option<String>) -> Self {
        self.reason = reason;
        self
    }

    pub fn with_request_info(
        mut self,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> Self {
        self.ip_address = ip_address;
        self.user_agent = user_agent;
        self
    }

    /// Attach metadata. Non-object values are wrapped under a `value` key.
    pub fn with_metadata(mut self, metadata: Value) -> Self {
        self.metadata = match metadata {
            Value::Object(_) => metadata,
            Value::Null => Value::Object(Default::default()),
            other => serde_json::json!({ "value": other }),
        };
        self
    }
}
