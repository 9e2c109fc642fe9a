//! Test fixtures and data factories
//!
//! All factories create real objects, not mocks.

use accademia::config::AuthConfig;
use accademia::core::models::user::{User, UserRole};
use uuid::Uuid;

/// Factory for creating test users
pub struct UserFactory;

impl UserFactory {
    /// Create an active user with a placeholder hash
    pub fn create() -> User {
        Self::with_role(UserRole::User)
    }

    /// Create an admin user
    pub fn admin() -> User {
        Self::with_role(UserRole::Admin)
    }

    /// Create a user with the given role and a unique email
    pub fn with_role(role: UserRole) -> User {
        User::new(
            format!("test-{}@example.com", &Uuid::new_v4().to_string()[..8]),
            "Test User".to_string(),
            "hashed_password".to_string(),
            role,
        )
    }

    /// Create a user with specific email
    pub fn with_email(email: &str) -> User {
        let mut user = Self::create();
        user.email = email.to_string();
        user
    }
}

/// Auth configuration with a fixed secret so tokens are reproducible within a test
pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        token_secret: "integration-test-secret-that-is-long-enough-0123456789".to_string(),
        ..AuthConfig::default()
    }
}
