//! Tests for configuration validators

use super::Validate;
use crate::config::models::*;

#[test]
fn test_auth_config_defaults_are_valid() {
    assert!(AuthConfig::default().validate().is_ok());
}

#[test]
fn test_auth_config_rejects_placeholder_secret() {
    let config = AuthConfig {
        token_secret: "change-me".to_string(),
        ..AuthConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_auth_config_rejects_out_of_range_ttl() {
    let short = AuthConfig {
        token_ttl: 10,
        ..AuthConfig::default()
    };
    assert!(short.validate().is_err());

    let long = AuthConfig {
        token_ttl: 86400 * 31,
        ..AuthConfig::default()
    };
    assert!(long.validate().is_err());
}

#[test]
fn test_rbac_config_rejects_unknown_default_role() {
    let config = RbacConfig {
        default_role: "student".to_string(),
        ..RbacConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_rbac_config_rejects_super_admin_default() {
    let config = RbacConfig {
        default_role: "super_admin".to_string(),
        ..RbacConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_database_config_skips_checks_when_disabled() {
    let config = DatabaseConfig {
        url: String::new(),
        enabled: false,
        ..DatabaseConfig::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_database_config_rejects_unknown_scheme() {
    let config = DatabaseConfig {
        url: "mysql://localhost/accademia".to_string(),
        enabled: true,
        ..DatabaseConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_server_config_rejects_zero_port() {
    let config = ServerConfig {
        port: 0,
        ..ServerConfig::default()
    };
    assert!(config.validate().is_err());
}
