use crate::auth::matrix::RoleMatrixEntry;
use crate::utils::error::Result as CrateResult;
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One row per role. Permission and section sets are stored as JSON arrays.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "role_matrix")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub role: String,

    #[sea_orm(column_type = "Text")]
    pub permissions: String,

    #[sea_orm(column_type = "Text")]
    pub sections: String,

    /// Compare-and-swap token, bumped on every write
    pub version: i64,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn to_entry(&self) -> CrateResult<RoleMatrixEntry> {
        let permissions: BTreeSet<String> = serde_json::from_str(&self.permissions)?;
        let sections: BTreeSet<String> = serde_json::from_str(&self.sections)?;
        Ok(RoleMatrixEntry {
            role: self.role.clone(),
            permissions,
            sections,
            version: self.version,
            updated_at: self.updated_at.naive_utc().and_utc(),
        })
    }

    pub fn from_entry(entry: &RoleMatrixEntry) -> CrateResult<ActiveModel> {
        Ok(ActiveModel {
            role: Set(entry.role.clone()),
            permissions: Set(serde_json::to_string(&entry.permissions)?),
            sections: Set(serde_json::to_string(&entry.sections)?),
            version: Set(entry.version),
            updated_at: Set(entry.updated_at.into()),
        })
    }
}
