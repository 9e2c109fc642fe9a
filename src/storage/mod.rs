//! Storage layer
//!
//! Wires the persistence contracts of the auth system to a backend: SeaORM when a
//! database is configured, in-memory otherwise.

/// Database storage module
pub mod database;
/// In-memory storage module
pub mod memory;

use crate::auth::audit::{AuditSink, TracingAuditSink};
use crate::auth::matrix::MatrixPersistence;
use crate::config::{AuditConfig, StorageConfig};
use crate::core::models::user::UserStore;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Persistence backends shared by the auth system
#[derive(Clone)]
pub struct StorageLayer {
    /// Account storage
    pub users: Arc<dyn UserStore>,
    /// Role matrix storage
    pub matrix: Arc<dyn MatrixPersistence>,
    /// Audit destination
    pub audit: Arc<dyn AuditSink>,
    /// Database connection, absent for in-memory storage
    pub database: Option<Arc<database::Database>>,
}

impl StorageLayer {
    /// Create a new storage layer. Connects and migrates when the database is enabled.
    pub async fn new(storage: &StorageConfig, audit: &AuditConfig) -> Result<Self> {
        info!("Initializing storage layer");

        if !storage.database.enabled {
            warn!("Database disabled, state will not survive a restart");
            return Ok(Self::in_memory_with_audit(audit.enabled));
        }

        debug!("Connecting to database");
        let db = Arc::new(database::Database::new(&storage.database).await?);
        db.migrate().await?;

        let audit: Arc<dyn AuditSink> = if audit.enabled {
            db.clone()
        } else {
            Arc::new(TracingAuditSink)
        };

        info!("Storage layer initialized ({})", db.backend_type().as_str());
        Ok(Self {
            users: db.clone(),
            matrix: db.clone(),
            audit,
            database: Some(db),
        })
    }

    /// In-memory backends with an in-memory audit log
    pub fn in_memory() -> Self {
        Self::in_memory_with_audit(true)
    }

    fn in_memory_with_audit(keep_audit: bool) -> Self {
        let audit: Arc<dyn AuditSink> = if keep_audit {
            Arc::new(memory::InMemoryAuditSink::new())
        } else {
            Arc::new(TracingAuditSink)
        };

        Self {
            users: Arc::new(memory::InMemoryUserStore::new()),
            matrix: Arc::new(memory::InMemoryMatrixPersistence::new()),
            audit,
            database: None,
        }
    }

    /// Run database migrations. No-op for in-memory storage.
    pub async fn migrate(&self) -> Result<()> {
        if let Some(db) = &self.database {
            db.migrate().await?;
        }
        Ok(())
    }

    /// Health check for the configured backend
    pub async fn health_check(&self) -> StorageHealthStatus {
        match &self.database {
            Some(db) => {
                let healthy = match db.health_check().await {
                    Ok(()) => true,
                    Err(e) => {
                        warn!("Database health check failed: {}", e);
                        false
                    }
                };
                StorageHealthStatus {
                    backend: db.backend_type().as_str(),
                    healthy,
                }
            }
            None => StorageHealthStatus {
                backend: "memory",
                healthy: true,
            },
        }
    }
}

impl std::fmt::Debug for StorageLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageLayer")
            .field("database", &self.database)
            .finish()
    }
}

/// Storage health status
#[derive(Debug, Clone, serde::Serialize)]
pub struct StorageHealthStatus {
    /// Backend name
    pub backend: &'static str,
    /// Whether the backend answered
    pub healthy: bool,
}
