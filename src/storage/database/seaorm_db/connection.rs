use crate::config::DatabaseConfig;
use crate::utils::error::{AccademiaError, Result};
use sea_orm::*;
use sea_orm_migration::MigratorTrait;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::super::entities;
use super::super::migration::Migrator;
use super::types::{DatabaseBackendType, SeaOrmDatabase};

impl SeaOrmDatabase {
    /// Connect to the configured database
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let backend_type = DatabaseBackendType::from_url(&config.url);
        let in_memory = config.url.contains(":memory:");

        let mut opt = ConnectOptions::new(config.url.clone());
        opt.connect_timeout(Duration::from_secs(config.connection_timeout))
            .acquire_timeout(Duration::from_secs(30))
            .sqlx_logging(true)
            .sqlx_logging_level(log::LevelFilter::Debug);

        if in_memory {
            // Every pooled connection to `:memory:` is a separate database
            opt.max_connections(1).min_connections(1);
        } else {
            opt.max_connections(config.max_connections)
                .min_connections(1)
                .idle_timeout(Duration::from_secs(600))
                .max_lifetime(Duration::from_secs(3600));
        }

        let db = Database::connect(opt).await.map_err(|e| {
            warn!("Database connection failed: {}", e);
            AccademiaError::Database(e)
        })?;

        info!("Database connection established ({:?})", backend_type);
        Ok(Self { db, backend_type })
    }

    /// Get the current backend type
    pub fn backend_type(&self) -> DatabaseBackendType {
        self.backend_type
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        info!("Running database migrations...");
        Migrator::up(&self.db, None).await.map_err(|e| {
            warn!("Migration failed: {}", e);
            AccademiaError::Database(e)
        })?;
        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Get the underlying database connection
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Health check
    pub async fn health_check(&self) -> Result<()> {
        debug!("Performing database health check");

        entities::RoleMatrix::find().limit(1).all(&self.db).await?;

        debug!("Database health check passed");
        Ok(())
    }
}
