//! Core domain types
//!
//! Accounts and the role hierarchy they carry.

pub mod models;
