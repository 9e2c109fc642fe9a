//! User models
//!
//! This module defines accounts, roles and the user persistence contract.

pub mod store;
pub mod types;

#[cfg(test)]
mod tests;

pub use store::UserStore;
pub use types::{User, UserRole};
