//! Configuration validation
//!
//! Each configuration section implements [`Validate`]; [`crate::config::Config::validate`]
//! runs them in order and wraps the first failure in a config error.

mod auth_validators;
mod config_validators;
mod storage_validators;
#[cfg(test)]
mod tests;
mod trait_def;

pub use trait_def::Validate;
