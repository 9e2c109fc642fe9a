//! Authentication configuration

use super::*;
use rand::distributions::Alphanumeric;
use rand::{Rng, thread_rng};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret used to sign session tokens
    #[serde(default = "generate_secure_token_secret")]
    pub token_secret: String,
    /// Session token lifetime in seconds
    #[serde(default = "default_token_ttl")]
    pub token_ttl: u64,
    /// Token issuer, also used as audience
    #[serde(default = "default_issuer")]
    pub issuer: String,
    /// Minimum password length accepted at sign-up
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,
    /// RBAC configuration
    #[serde(default)]
    pub rbac: RbacConfig,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: generate_secure_token_secret(),
            token_ttl: default_token_ttl(),
            issuer: default_issuer(),
            min_password_length: default_min_password_length(),
            rbac: RbacConfig::default(),
        }
    }
}

/// RBAC configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RbacConfig {
    /// Role assigned to users created through sign-up
    #[serde(default = "default_role")]
    pub default_role: String,
    /// Upper bound for a single role matrix read or write, in milliseconds
    #[serde(default = "default_persistence_timeout_ms")]
    pub persistence_timeout_ms: u64,
}

impl Default for RbacConfig {
    fn default() -> Self {
        Self {
            default_role: default_role(),
            persistence_timeout_ms: default_persistence_timeout_ms(),
        }
    }
}

impl RbacConfig {
    pub fn persistence_timeout(&self) -> Duration {
        Duration::from_millis(self.persistence_timeout_ms)
    }
}

/// Generate a secure random token secret
fn generate_secure_token_secret() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}
