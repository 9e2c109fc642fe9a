//! Session token handling
//!
//! Signed, expiring bearer tokens whose subject is the user id.

mod handler;
pub mod types;
mod utils;


pub use types::{Claims, SessionToken, SessionTokenHandler};
