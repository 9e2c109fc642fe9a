//! # Accademia
//!
//! Access-control core of the Accademia training and compliance platform.
//!
//! - a five-level role hierarchy with a static permission table
//! - a permission engine with wildcards, attribute conditions and inheritance
//! - a persisted role/section matrix that the platform owner edits at runtime
//! - session tokens, sign-up and sign-in
//! - guards and an audited, permission-checked execution path
//!
//! ## Checking a permission
//!
//! ```rust
//! use accademia::auth::rbac::{PermissionContext, RbacSystem};
//!
//! let rbac = RbacSystem::new();
//! assert!(rbac.has_permission("admin", "users", "delete", None));
//! assert!(!rbac.has_permission("user", "users", "delete", None));
//! assert!(rbac.has_permission("user", "profile", "update", Some(&PermissionContext::own(true))));
//! ```

pub mod auth;
pub mod config;
pub mod core;
pub mod monitoring;
pub mod server;
pub mod storage;
pub mod utils;

pub use auth::{AuthContext, AuthSystem, Authorizer};
pub use config::Config;
pub use utils::error::{AccademiaError, Result};

/// Current version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
