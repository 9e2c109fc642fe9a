//! Audit sink integration tests over SeaORM

#[cfg(test)]
mod tests {
    use crate::common::TestDatabase;
    use accademia::auth::audit::{AuditLogEntry, AuditSink};
    use chrono::{Duration, Utc};
    use serde_json::json;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_append_and_recent() {
        let db = TestDatabase::new().await;
        let user_id = Uuid::new_v4();

        let mut older = AuditLogEntry::new("read", "documents", true)
            .with_user(Some(user_id), Some("user".to_string()))
            .with_reason(Some("documents.read".to_string()));
        older.timestamp = Utc::now() - Duration::seconds(10);

        let newer = AuditLogEntry::new("delete", "users", false)
            .with_user(Some(user_id), Some("user".to_string()))
            .with_reason(Some("No matching grant".to_string()))
            .with_request_info(Some("10.0.0.1".to_string()), Some("curl/8.0".to_string()))
            .with_metadata(json!({ "target": "someone" }));

        db.db().append(&older).await.unwrap();
        db.db().append(&newer).await.unwrap();

        let recent = db.db().recent(10).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, newer.id);
        assert_eq!(recent[1].id, older.id);

        let stored = &recent[0];
        assert!(!stored.granted);
        assert_eq!(stored.user_id, Some(user_id));
        assert_eq!(stored.ip_address.as_deref(), Some("10.0.0.1"));
        assert_eq!(stored.metadata["target"], "someone");

        assert_eq!(db.db().recent(1).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_anonymous_entry() {
        let db = TestDatabase::new().await;
        let entry = AuditLogEntry::new("read", "normatives", false)
            .with_reason(Some("Not authenticated".to_string()));

        db.db().append(&entry).await.unwrap();

        let recent = db.db().recent(5).await.unwrap();
        assert_eq!(recent.len(), 1);
        assert!(recent[0].user_id.is_none());
        assert!(recent[0].role.is_none());
        assert_eq!(recent[0].metadata, json!({}));
    }
}
