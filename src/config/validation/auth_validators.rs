//! Authentication configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use crate::core::models::user::UserRole;
use tracing::debug;

const PLACEHOLDER_SECRETS: &[&str] = &["change-me", "change-me-in-production", "your-secret-key"];

impl Validate for AuthConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating auth configuration");

        if self.token_secret.is_empty() {
            return Err("Token secret cannot be empty".to_string());
        }

        if PLACEHOLDER_SECRETS.contains(&self.token_secret.as_str()) {
            return Err("Token secret must not use a placeholder value".to_string());
        }

        if self.token_secret.len() < 32 {
            return Err("Token secret should be at least 32 characters long".to_string());
        }

        if self.token_ttl < 300 {
            return Err("Token TTL should be at least 5 minutes (300 seconds)".to_string());
        }

        if self.token_ttl > 86400 * 30 {
            return Err("Token TTL should not exceed 30 days".to_string());
        }

        if self.issuer.trim().is_empty() {
            return Err("Token issuer cannot be empty".to_string());
        }

        if self.min_password_length < 6 {
            return Err("Minimum password length must be at least 6".to_string());
        }

        self.rbac.validate()?;

        Ok(())
    }
}

impl Validate for RbacConfig {
    fn validate(&self) -> Result<(), String> {
        let role: UserRole = self
            .default_role
            .parse()
            .map_err(|_| format!("Unknown default role: {}", self.default_role))?;

        if role == UserRole::SuperAdmin {
            return Err("Default role must not be super_admin".to_string());
        }

        if self.persistence_timeout_ms == 0 {
            return Err("Persistence timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}
