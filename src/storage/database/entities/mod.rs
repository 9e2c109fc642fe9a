/// Audit log entity module
pub mod audit_log;
/// Role matrix entity module
pub mod role_matrix;
/// User entity module
pub mod user;

pub use audit_log::Entity as AuditLog;
pub use role_matrix::Entity as RoleMatrix;
pub use user::Entity as User;
