use crate::auth::matrix::{MatrixPersistence, RoleMatrixEntry};
use crate::utils::error::{AccademiaError, Result};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::*;
use std::collections::BTreeSet;
use tracing::debug;

use super::super::entities::{self, role_matrix};
use super::types::SeaOrmDatabase;

/// Which set of a row a write touches
#[derive(Clone, Copy)]
enum MatrixColumn {
    Permissions,
    Sections,
}

impl SeaOrmDatabase {
    /// Add or remove `value` in one set of a row, conditional on `expected_version`
    async fn write_matrix_row(
        &self,
        role: &str,
        column: MatrixColumn,
        value: &str,
        present: bool,
        expected_version: i64,
    ) -> Result<RoleMatrixEntry> {
        let row = entities::RoleMatrix::find_by_id(role.to_string())
            .one(&self.db)
            .await?
            .ok_or_else(|| AccademiaError::not_found(format!("No matrix row for {}", role)))?;

        if row.version != expected_version {
            return Err(AccademiaError::conflict(format!(
                "Row for {} is at version {}, expected {}",
                role, row.version, expected_version
            )));
        }

        let mut entry = row.to_entry()?;
        let set: &mut BTreeSet<String> = match column {
            MatrixColumn::Permissions => &mut entry.permissions,
            MatrixColumn::Sections => &mut entry.sections,
        };
        if present {
            set.insert(value.to_string());
        } else {
            set.remove(value);
        }
        let encoded = serde_json::to_string(set)?;

        let target = match column {
            MatrixColumn::Permissions => role_matrix::Column::Permissions,
            MatrixColumn::Sections => role_matrix::Column::Sections,
        };
        let now = Utc::now();
        let updated_at: DateTimeWithTimeZone = now.into();

        // The version filter turns a concurrent write into zero affected rows
        let result = entities::RoleMatrix::update_many()
            .col_expr(target, Expr::value(encoded))
            .col_expr(role_matrix::Column::Version, Expr::value(expected_version + 1))
            .col_expr(role_matrix::Column::UpdatedAt, Expr::value(updated_at))
            .filter(role_matrix::Column::Role.eq(role))
            .filter(role_matrix::Column::Version.eq(expected_version))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AccademiaError::conflict(format!(
                "Row for {} changed concurrently",
                role
            )));
        }

        entry.version = expected_version + 1;
        entry.updated_at = now;
        Ok(entry)
    }
}

#[async_trait]
impl MatrixPersistence for SeaOrmDatabase {
    async fn load_role_matrix(&self) -> Result<Vec<RoleMatrixEntry>> {
        debug!("Loading role matrix");

        entities::RoleMatrix::find()
            .all(&self.db)
            .await?
            .iter()
            .map(role_matrix::Model::to_entry)
            .collect()
    }

    async fn set_permission(
        &self,
        role: &str,
        permission: &str,
        granted: bool,
        expected_version: i64,
    ) -> Result<RoleMatrixEntry> {
        debug!("Setting {} on {} to {}", permission, role, granted);
        self.write_matrix_row(
            role,
            MatrixColumn::Permissions,
            permission,
            granted,
            expected_version,
        )
        .await
    }

    async fn set_section_visibility(
        &self,
        role: &str,
        section: &str,
        visible: bool,
        expected_version: i64,
    ) -> Result<RoleMatrixEntry> {
        debug!("Setting section {} on {} to {}", section, role, visible);
        self.write_matrix_row(
            role,
            MatrixColumn::Sections,
            section,
            visible,
            expected_version,
        )
        .await
    }

    async fn seed(&self, entries: &[RoleMatrixEntry]) -> Result<usize> {
        let mut inserted = 0;
        for entry in entries {
            let rows = entities::RoleMatrix::insert(role_matrix::Model::from_entry(entry)?)
                .on_conflict(
                    OnConflict::column(role_matrix::Column::Role)
                        .do_nothing()
                        .to_owned(),
                )
                .exec_without_returning(&self.db)
                .await?;
            inserted += rows as usize;
        }
        debug!("Seeded {} role matrix rows", inserted);
        Ok(inserted)
    }
}
