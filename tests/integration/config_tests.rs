//! Configuration loading from YAML files

#[cfg(test)]
mod tests {
    use accademia::config::Config;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_full_config() {
        let file = write_config(
            r#"
server:
  host: 127.0.0.1
  port: 9000
auth:
  token_secret: "a-very-long-secret-used-only-in-this-test-0123456789"
  token_ttl: 3600
  issuer: accademia-test
  rbac:
    default_role: guest
    persistence_timeout_ms: 2000
storage:
  database:
    url: "sqlite::memory:"
    enabled: true
audit:
  recent_limit: 50
"#,
        );

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.auth.token_ttl, 3600);
        assert_eq!(config.auth.rbac.default_role, "guest");
        assert_eq!(config.audit.recent_limit, 50);
        assert!(config.storage.database.enabled);
    }

    #[tokio::test]
    async fn test_invalid_role_is_rejected() {
        let file = write_config(
            r#"
auth:
  token_secret: "a-very-long-secret-used-only-in-this-test-0123456789"
  rbac:
    default_role: super_admin
"#,
        );

        assert!(Config::from_file(file.path()).await.is_err());
    }
}
