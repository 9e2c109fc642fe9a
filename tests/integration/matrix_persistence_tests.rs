//! Role matrix persistence and store integration tests over SeaORM

#[cfg(test)]
mod tests {
    use crate::common::TestDatabase;
    use accademia::auth::matrix::{MatrixPersistence, RoleMatrixEntry, RoleMatrixStore};
    use accademia::auth::rbac::RbacSystem;
    use accademia::utils::error::AccademiaError;
    use std::sync::Arc;
    use std::time::Duration;

    fn store(db: &TestDatabase) -> Arc<RoleMatrixStore> {
        Arc::new(RoleMatrixStore::new(db.db_arc(), Duration::from_secs(5)))
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let db = TestDatabase::new().await;
        let entries = RoleMatrixEntry::seed_all();

        assert_eq!(db.db().seed(&entries).await.unwrap(), 5);
        assert_eq!(db.db().seed(&entries).await.unwrap(), 0);

        let rows = db.db().load_role_matrix().await.unwrap();
        let admin = rows.iter().find(|row| row.role == "admin").unwrap();
        assert_eq!(admin.version, 1);
        assert!(admin.permissions.contains("users.delete"));
        assert!(admin.sections.contains("admin"));
    }

    #[tokio::test]
    async fn test_conditional_write() {
        let db = TestDatabase::seeded().await;

        let row = db
            .db()
            .set_permission("user", "users.read", true, 1)
            .await
            .unwrap();
        assert_eq!(row.version, 2);
        assert!(row.permissions.contains("users.read"));

        let stale = db
            .db()
            .set_permission("user", "users.update", true, 1)
            .await
            .unwrap_err();
        assert!(matches!(stale, AccademiaError::Conflict(_)));

        let rows = db.db().load_role_matrix().await.unwrap();
        let user = rows.iter().find(|row| row.role == "user").unwrap();
        assert_eq!(user.version, 2);
        assert!(!user.permissions.contains("users.update"));
    }

    #[tokio::test]
    async fn test_write_missing_row_is_not_found() {
        let db = TestDatabase::new().await;

        let err = db
            .db()
            .set_section_visibility("guest", "courses", true, 1)
            .await
            .unwrap_err();
        assert!(matches!(err, AccademiaError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_store_changes_survive_reload() {
        let db = TestDatabase::new().await;

        let first = store(&db);
        first.load().await.unwrap();
        first
            .update_role_permission("operator", "users.read", true)
            .await
            .unwrap();
        first
            .update_role_section("guest", "courses", true)
            .await
            .unwrap();

        let second = store(&db);
        second.load().await.unwrap();
        let rbac = RbacSystem::new().with_matrix(second);

        assert!(rbac.has_permission("operator", "users", "read", None));
        assert!(rbac.can_view_section("guest", "courses"));
    }

    #[tokio::test]
    async fn test_concurrent_stores_conflict() {
        let db = TestDatabase::seeded().await;
        let a = store(&db);
        let b = store(&db);
        a.load().await.unwrap();
        b.load().await.unwrap();

        a.update_role_permission("user", "users.read", true)
            .await
            .unwrap();

        let err = b
            .update_role_permission("user", "users.update", true)
            .await
            .unwrap_err();
        assert!(matches!(err, AccademiaError::Conflict(_)));

        // The conflict refreshed `b`, so a retry succeeds
        b.update_role_permission("user", "users.update", true)
            .await
            .unwrap();

        let rbac = RbacSystem::new().with_matrix(b);
        assert!(rbac.has_permission("user", "users", "read", None));
        assert!(rbac.has_permission("user", "users", "update", None));
    }

    #[tokio::test]
    async fn test_super_admin_revoke_is_protected() {
        let db = TestDatabase::new().await;
        let matrix = store(&db);
        matrix.load().await.unwrap();

        let err = matrix
            .update_role_permission("super_admin", "*.*", false)
            .await
            .unwrap_err();
        assert!(matches!(err, AccademiaError::Protected(_)));

        let rows = db.db().load_role_matrix().await.unwrap();
        let owner = rows.iter().find(|row| row.role == "super_admin").unwrap();
        assert_eq!(owner.version, 1);
    }
}
