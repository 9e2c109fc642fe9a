//! Common test utilities for accademia
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::{TestDatabase, UserFactory};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let db = TestDatabase::new().await;
//!     let user = UserFactory::admin();
//!     // ...
//! }
//! ```

pub mod database;
pub mod fixtures;

// Re-export commonly used items
pub use database::TestDatabase;
pub use fixtures::{UserFactory, test_auth_config};
