//! Test database utilities
//!
//! Provides in-memory SQLite database for testing without external dependencies.
//! Each test gets an isolated database instance using SeaORM.

use accademia::auth::matrix::{MatrixPersistence, RoleMatrixEntry};
use accademia::config::DatabaseConfig;
use accademia::storage::database::Database;
use std::sync::Arc;

/// Test database wrapper providing isolated in-memory SQLite instances
#[derive(Debug, Clone)]
pub struct TestDatabase {
    inner: Arc<Database>,
}

impl TestDatabase {
    /// Create a new migrated in-memory test database
    pub async fn new() -> Self {
        let db = Database::new(&test_db_config())
            .await
            .expect("Failed to create in-memory test database");

        db.migrate()
            .await
            .expect("Failed to run database migrations");

        Self {
            inner: Arc::new(db),
        }
    }

    /// Create a test database with the default role matrix
    pub async fn seeded() -> Self {
        let db = Self::new().await;
        db.inner
            .seed(&RoleMatrixEntry::seed_all())
            .await
            .expect("Failed to seed role matrix");
        db
    }

    /// Get reference to the underlying database
    pub fn db(&self) -> &Database {
        &self.inner
    }

    /// Get Arc to the underlying database
    pub fn db_arc(&self) -> Arc<Database> {
        Arc::clone(&self.inner)
    }
}

/// Helper to create a simple test database config
pub fn test_db_config() -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        connection_timeout: 5,
        enabled: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_database_creation() {
        let db = TestDatabase::new().await;
        assert!(db.db().health_check().await.is_ok());
    }

    #[tokio::test]
    async fn test_seeded_database() {
        let db = TestDatabase::seeded().await;
        let rows = db.db().load_role_matrix().await.unwrap();
        assert_eq!(rows.len(), 5);
    }
}
