//! Configuration data models
//!
//! This module defines all configuration structures used throughout the service.

#![allow(missing_docs)]

pub mod audit;
pub mod auth;
pub mod server;
pub mod storage;

pub use audit::*;
pub use auth::*;
pub use server::*;
pub use storage::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default session token lifetime in seconds (24h)
pub fn default_token_ttl() -> u64 {
    86400
}

/// Default token issuer
pub fn default_issuer() -> String {
    "accademia".to_string()
}

pub fn default_min_password_length() -> usize {
    8
}

/// Default role for new users
pub fn default_role() -> String {
    "user".to_string()
}

/// Default bound on matrix persistence calls
pub fn default_persistence_timeout_ms() -> u64 {
    5000
}

pub fn default_max_connections() -> u32 {
    10
}

pub fn default_connection_timeout() -> u64 {
    5
}

pub fn default_database_url() -> String {
    "sqlite://accademia.db?mode=rwc".to_string()
}

pub fn default_recent_limit() -> u64 {
    100
}

pub fn default_true() -> bool {
    true
}
