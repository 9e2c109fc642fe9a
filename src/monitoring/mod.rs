//! Operational notices
//!
//! A side channel for events operators should see: permission denials, audit write
//! failures and role matrix changes.

pub mod notices;
pub mod types;

pub use notices::NoticeBus;
pub use types::{Notice, NoticeCategory, NoticeSeverity};
