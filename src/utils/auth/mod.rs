//! Authentication and security utilities

pub mod password;

pub use password::{PasswordPolicy, burn_verification, hash_password, verify_password};
