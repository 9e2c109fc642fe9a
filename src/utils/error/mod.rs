//! Error handling for Accademia
//!
//! This module defines the error type used throughout the crate, its helper
//! constructors and its HTTP response mapping.

#![allow(missing_docs)]

mod helpers;
mod response;
#[cfg(test)]
mod tests;
mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{AccademiaError, Result};
