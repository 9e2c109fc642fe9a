//! Runtime-editable role/section visibility matrix
//!
//! The matrix is persisted through a [`MatrixPersistence`] backend and served from an
//! atomically swapped in-memory snapshot, so permission checks never touch storage.

mod persistence;
mod store;
mod types;

pub use persistence::MatrixPersistence;
pub use store::RoleMatrixStore;
pub use types::{RoleMatrix, RoleMatrixEntry};
