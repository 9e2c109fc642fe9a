// Module declarations
mod audit_ops;
mod connection;
mod matrix_ops;
mod types;
mod user_ops;

// Re-export public types
pub use types::{DatabaseBackendType, SeaOrmDatabase};
