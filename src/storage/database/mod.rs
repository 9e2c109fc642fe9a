//! Database storage implementation using SeaORM
//!
//! Backs users, the role matrix and the audit log with SQLite or PostgreSQL.

/// Database entities module
pub mod entities;
/// Database migration module
pub mod migration;
/// SeaORM database implementation module
pub mod seaorm_db;

// Re-export the main database interface
pub use seaorm_db::SeaOrmDatabase as Database;
pub use seaorm_db::DatabaseBackendType;
