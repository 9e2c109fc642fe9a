//! Logging utilities
//!
//! Structured security events on the `security` tracing target.

mod security;

pub use security::SecurityLogger;
