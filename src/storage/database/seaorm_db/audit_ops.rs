use crate::auth::audit::{AuditLogEntry, AuditSink};
use crate::utils::error::Result;
use async_trait::async_trait;
use sea_orm::*;

use super::super::entities::{self, audit_log};
use super::types::SeaOrmDatabase;

#[async_trait]
impl AuditSink for SeaOrmDatabase {
    async fn append(&self, entry: &AuditLogEntry) -> Result<()> {
        entities::AuditLog::insert(audit_log::Model::from_entry(entry)?)
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }

    async fn recent(&self, limit: u64) -> Result<Vec<AuditLogEntry>> {
        entities::AuditLog::find()
            .order_by_desc(audit_log::Column::Timestamp)
            .limit(limit)
            .all(&self.db)
            .await?
            .iter()
            .map(audit_log::Model::to_entry)
            .collect()
    }
}
