//! Authorization middleware
//!
//! Guards over an [`crate::auth::AuthContext`] and the audited execution path every
//! state-changing operation goes through.

mod authorizer;
mod execute;
mod guards;

pub use authorizer::Authorizer;
pub use guards::Guard;
