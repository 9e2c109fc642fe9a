//! Authentication and authorization system
//!
//! Sessions, the permission engine, the role matrix it reads from, and the audited
//! authorization path built on top of them.

pub mod audit;
pub mod jwt;
pub mod matrix;
pub mod middleware;
mod password;
pub mod rbac;
mod system;
pub mod types;
mod user_management;


pub use crate::core::models::user::{User, UserRole};
pub use middleware::{Authorizer, Guard};
pub use system::AuthSystem;
pub use types::{AuthContext, AuthMethod, Capabilities};
