//! Integration tests for accademia
//!
//! These tests verify the interaction between multiple components against a real
//! in-memory SQLite database.

pub mod audit_tests;
pub mod auth_flow_tests;
pub mod config_tests;
pub mod database_tests;
pub mod matrix_persistence_tests;
