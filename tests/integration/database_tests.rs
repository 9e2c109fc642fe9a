//! User store integration tests over SeaORM

#[cfg(test)]
mod tests {
    use crate::common::{TestDatabase, UserFactory};
    use accademia::core::models::user::UserStore;
    use accademia::utils::error::AccademiaError;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_create_and_find_user() {
        let db = TestDatabase::new().await;
        let user = UserFactory::admin();

        let created = db.db().create_user(&user).await.unwrap();
        assert_eq!(created.id, user.id);

        let by_id = db.db().find_user_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(by_id.email, user.email);
        assert_eq!(by_id.role, "admin");
        assert!(by_id.is_active);
        assert_eq!(by_id.password_hash, "hashed_password");

        let by_email = db
            .db()
            .find_user_by_email(&user.email)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_email.id, user.id);
    }

    #[tokio::test]
    async fn test_missing_user_is_none() {
        let db = TestDatabase::new().await;

        assert!(db.db().find_user_by_id(Uuid::new_v4()).await.unwrap().is_none());
        assert!(
            db.db()
                .find_user_by_email("nobody@example.com")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_duplicate_email_is_already_exists() {
        let db = TestDatabase::new().await;
        let first = UserFactory::with_email("dup@example.com");
        let second = UserFactory::with_email("dup@example.com");

        db.db().create_user(&first).await.unwrap();
        let err = db.db().create_user(&second).await.unwrap_err();
        assert!(matches!(err, AccademiaError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_user_updates() {
        let db = TestDatabase::new().await;
        let user = UserFactory::create();
        db.db().create_user(&user).await.unwrap();

        db.db().update_user_password(user.id, "new_hash").await.unwrap();
        db.db().update_user_last_login(user.id).await.unwrap();
        db.db().set_user_role(user.id, "operator").await.unwrap();
        db.db().set_user_active(user.id, false).await.unwrap();

        let stored = db.db().find_user_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(stored.password_hash, "new_hash");
        assert!(stored.last_login_at.is_some());
        assert_eq!(stored.role, "operator");
        assert!(!stored.is_active);
        assert!(stored.updated_at >= user.updated_at);
    }

    #[tokio::test]
    async fn test_update_missing_user_is_not_found() {
        let db = TestDatabase::new().await;

        let err = db
            .db()
            .set_user_active(Uuid::new_v4(), false)
            .await
            .unwrap_err();
        assert!(matches!(err, AccademiaError::NotFound(_)));
    }
}
