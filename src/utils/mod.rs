//! Utility modules for Accademia
//!
//! - **auth**: password hashing and policy
//! - **error**: error type and HTTP mapping
//! - **logging**: security event logging

pub mod auth;
pub mod error;
pub mod logging;

use regex::Regex;
use std::sync::OnceLock;

/// Check if a string is a valid email
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL_REGEX
        .get_or_init(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(email))
}

/// Trim and lowercase an email address
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Truncate string to specified length with ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
