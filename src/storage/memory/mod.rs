//! In-memory storage backends
//!
//! Used when no database is configured and throughout the test suite. Every backend can
//! be switched into a failing state to exercise error paths.

mod audit;
mod matrix;
mod users;

pub use audit::InMemoryAuditSink;
pub use matrix::InMemoryMatrixPersistence;
pub use users::InMemoryUserStore;
