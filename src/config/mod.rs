//! Configuration management for Accademia
//!
//! This module handles loading, validation, and management of the service configuration.

pub mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{AccademiaError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Authentication, session and RBAC configuration
    #[serde(default)]
    pub auth: AuthConfig,
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Audit log configuration
    #[serde(default)]
    pub audit: AuditConfig,
}

impl Config {
    /// Load configuration from file, then apply environment overrides
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AccademiaError::Config(format!("Failed to read config file: {}", e)))?;

        let mut config: Config = serde_yaml::from_str(&content)
            .map_err(|e| AccademiaError::Config(format!("Failed to parse config: {}", e)))?;

        config.apply_env_overrides()?;
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when it exists, otherwise from the environment
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        if tokio::fs::try_exists(path.as_ref()).await.unwrap_or(false) {
            Self::from_file(path).await
        } else {
            info!(
                "Config file {:?} not found, using defaults and environment",
                path.as_ref()
            );
            Self::from_env()
        }
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Get auth configuration
    pub fn auth(&self) -> &AuthConfig {
        &self.auth
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.storage
    }

    /// Get audit configuration
    pub fn audit(&self) -> &AuditConfig {
        &self.audit
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.server
            .validate()
            .map_err(|e| AccademiaError::Config(format!("Server config error: {}", e)))?;

        self.auth
            .validate()
            .map_err(|e| AccademiaError::Config(format!("Auth config error: {}", e)))?;

        self.storage
            .validate()
            .map_err(|e| AccademiaError::Config(format!("Storage config error: {}", e)))?;

        self.audit
            .validate()
            .map_err(|e| AccademiaError::Config(format!("Audit config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            AccademiaError::Config(format!("Failed to serialize config to YAML: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_config_from_file() {
        let config_content = r#"
server:
  host: "127.0.0.1"
  port: 8080

auth:
  token_secret: "Test-Secret-That-Is-At-Least-32-Characters-Long"
  token_ttl: 3600
  rbac:
    default_role: "user"
    persistence_timeout_ms: 2000

storage:
  database:
    url: "sqlite::memory:"
    enabled: true

audit:
  recent_limit: 50
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(config_content.as_bytes()).unwrap();

        let config = Config::from_file(temp_file.path()).await.unwrap();

        assert_eq!(config.server().host, "127.0.0.1");
        assert_eq!(config.server().port, 8080);
        assert_eq!(config.auth().token_ttl, 3600);
        assert_eq!(config.auth().rbac.persistence_timeout_ms, 2000);
        assert!(config.storage().database.enabled);
        assert_eq!(config.audit().recent_limit, 50);
    }

    #[tokio::test]
    async fn test_config_rejects_short_secret() {
        let config_content = r#"
auth:
  token_secret: "short"
"#;
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(config_content.as_bytes()).unwrap();

        let result = Config::from_file(temp_file.path()).await;
        assert!(matches!(result, Err(AccademiaError::Config(_))));
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.auth().token_ttl, 86400);
        assert_eq!(config.auth().rbac.default_role, "user");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("token_ttl"));
    }
}
