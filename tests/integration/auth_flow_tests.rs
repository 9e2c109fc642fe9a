//! Session and authorization flow over SQLite storage

#[cfg(test)]
mod tests {
    use crate::common::{TestDatabase, test_auth_config};
    use accademia::auth::matrix::RoleMatrixStore;
    use accademia::auth::rbac::RbacSystem;
    use accademia::auth::{AuthSystem, Authorizer};
    use accademia::core::models::user::{UserRole, UserStore};
    use accademia::monitoring::NoticeBus;
    use accademia::utils::error::AccademiaError;
    use std::sync::Arc;
    use std::time::Duration;

    struct Harness {
        db: TestDatabase,
        auth: AuthSystem,
        authorizer: Authorizer,
        matrix: Arc<RoleMatrixStore>,
    }

    async fn harness() -> Harness {
        let db = TestDatabase::new().await;
        let matrix = Arc::new(RoleMatrixStore::new(db.db_arc(), Duration::from_secs(5)));
        matrix.load().await.unwrap();

        let rbac = Arc::new(RbacSystem::new().with_matrix(matrix.clone()));
        let auth = AuthSystem::new(&test_auth_config(), db.db_arc(), rbac.clone()).unwrap();
        let authorizer = Authorizer::new(rbac, db.db_arc(), NoticeBus::default());

        Harness {
            db,
            auth,
            authorizer,
            matrix,
        }
    }

    #[tokio::test]
    async fn test_sign_up_sign_in_authenticate() {
        let h = harness().await;

        let (user, _) = h
            .auth
            .sign_up("Ada@Example.com", "correct horse", "Ada Lovelace")
            .await
            .unwrap();
        assert_eq!(user.email, "ada@example.com");

        let (signed_in, session) = h
            .auth
            .sign_in("ada@example.com", "correct horse")
            .await
            .unwrap();
        assert_eq!(signed_in.id, user.id);

        let ctx = h.auth.authenticate(&session.access_token).await;
        assert_eq!(ctx.user_id(), Some(user.id));
        assert_eq!(ctx.role(), Some("user"));

        let stored = h.db.db().find_user_by_id(user.id).await.unwrap().unwrap();
        assert!(stored.last_login_at.is_some());
    }

    #[tokio::test]
    async fn test_deactivated_user_becomes_anonymous() {
        let h = harness().await;
        let (user, session) = h
            .auth
            .sign_up("ada@example.com", "correct horse", "Ada")
            .await
            .unwrap();

        h.db.db().set_user_active(user.id, false).await.unwrap();

        assert!(!h.auth.authenticate(&session.access_token).await.is_authenticated());
        assert!(matches!(
            h.auth.sign_in("ada@example.com", "correct horse").await,
            Err(AccademiaError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_role_change_takes_effect_on_next_request() {
        let h = harness().await;
        let (user, session) = h
            .auth
            .sign_up("ada@example.com", "correct horse", "Ada")
            .await
            .unwrap();

        let ctx = h.auth.authenticate(&session.access_token).await;
        assert!(!h.authorizer.check(&ctx, "users", "read", None));

        h.db.db().set_user_role(user.id, "admin").await.unwrap();

        let ctx = h.auth.authenticate(&session.access_token).await;
        assert!(h.authorizer.check(&ctx, "users", "read", None));
    }

    #[tokio::test]
    async fn test_audited_matrix_edit() {
        let h = harness().await;
        let owner = h
            .auth
            .create_user("owner@example.com", "correct horse", "Owner", UserRole::SuperAdmin)
            .await
            .unwrap();
        let admin = h
            .auth
            .create_user("admin@example.com", "correct horse", "Admin", UserRole::Admin)
            .await
            .unwrap();

        let owner_ctx = h
            .auth
            .authenticate(&h.auth.tokens().issue_token(owner.id).unwrap())
            .await;
        let admin_ctx = h
            .auth
            .authenticate(&h.auth.tokens().issue_token(admin.id).unwrap())
            .await;

        let matrix = h.matrix.clone();
        let denied = h
            .authorizer
            .execute_with_permission_check(
                &admin_ctx,
                "admin_panel",
                "roles",
                || async { matrix.update_role_permission("guest", "courses.read", true).await },
                None,
                None,
            )
            .await;
        assert!(matches!(denied, Err(AccademiaError::PermissionDenied { .. })));

        let matrix = h.matrix.clone();
        h.authorizer
            .execute_with_permission_check(
                &owner_ctx,
                "admin_panel",
                "roles",
                || async { matrix.update_role_permission("guest", "courses.read", true).await },
                None,
                None,
            )
            .await
            .unwrap();

        assert!(h.authorizer.rbac().has_permission("guest", "courses", "read", None));

        let audit = h.authorizer.audit().recent(10).await.unwrap();
        assert_eq!(audit.len(), 2);
        assert_eq!(audit.iter().filter(|entry| entry.granted).count(), 1);
        assert!(audit.iter().any(|entry| entry.user_id == Some(admin.id) && !entry.granted));
    }
}
