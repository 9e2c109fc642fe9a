use crate::auth::audit::AuditLogEntry;
use crate::utils::error::Result as CrateResult;
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Append-only authorization decisions
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "audit_logs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub timestamp: DateTimeWithTimeZone,

    pub user_id: Option<Uuid>,

    pub role: Option<String>,

    pub action: String,

    pub resource: String,

    pub granted: bool,

    #[sea_orm(column_type = "Text", nullable)]
    pub reason: Option<String>,

    pub ip_address: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub user_agent: Option<String>,

    /// JSON object
    #[sea_orm(column_type = "Text")]
    pub metadata: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_entry(&self) -> CrateResult<AuditLogEntry> {
        Ok(AuditLogEntry {
            id: self.id,
            timestamp: self.timestamp.naive_utc().and_utc(),
            user_id: self.user_id,
            role: self.role.clone(),
            action: self.action.clone(),
            resource: self.resource.clone(),
            granted: self.granted,
            reason: self.reason.clone(),
            ip_address: self.ip_address.clone(),
            user_agent: self.user_agent.clone(),
            metadata: serde_json::from_str(&self.metadata)?,
        })
    }

    pub fn from_entry(entry: &AuditLogEntry) -> CrateResult<ActiveModel> {
        Ok(ActiveModel {
            id: Set(entry.id),
            timestamp: Set(entry.timestamp.into()),
            user_id: Set(entry.user_id),
            role: Set(entry.role.clone()),
            action: Set(entry.action.clone()),
            resource: Set(entry.resource.clone()),
            granted: Set(entry.granted),
            reason: Set(entry.reason.clone()),
            ip_address: Set(entry.ip_address.clone()),
            user_agent: Set(entry.user_agent.clone()),
            metadata: Set(serde_json::to_string(&entry.metadata)?),
        })
    }
}
