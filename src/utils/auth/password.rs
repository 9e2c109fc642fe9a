//! Password hashing and policy

use crate::utils::error::{AccademiaError, Result};
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use std::sync::OnceLock;

const MAX_PASSWORD_LEN: usize = 128;

/// Hash a password with Argon2id and a fresh random salt
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AccademiaError::crypto(format!("Failed to hash password: {}", e)))
}

/// Verify a password against a stored PHC hash string
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| AccademiaError::crypto(format!("Failed to parse password hash: {}", e)))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AccademiaError::crypto(format!(
            "Password verification failed: {}",
            e
        ))),
    }
}

/// Run a verification against a throwaway hash so that a sign-in for an unknown email
/// costs about as much as one with a wrong password
pub fn burn_verification(password: &str) {
    static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();
    let dummy = DUMMY_HASH.get_or_init(|| hash_password("accademia-dummy-password").ok());
    if let Some(hash) = dummy {
        let _ = verify_password(password, hash);
    }
}

/// Password requirements applied at sign-up and password change
#[derive(Debug, Clone, Copy)]
pub struct PasswordPolicy {
    pub min_length: usize,
}

impl PasswordPolicy {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    pub fn validate(&self, password: &str) -> Result<()> {
        let length = password.chars().count();
        if length < self.min_length {
            return Err(AccademiaError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }
        if length > MAX_PASSWORD_LEN {
            return Err(AccademiaError::validation(format!(
                "Password must be at most {} characters long",
                MAX_PASSWORD_LEN
            )));
        }
        if password.trim().is_empty() {
            return Err(AccademiaError::validation("Password cannot be blank"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("Sicurezza2024!").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("Sicurezza2024!", &hash).unwrap());
        assert!(!verify_password("sicurezza2024!", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("same-password").unwrap();
        let second = hash_password("same-password").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        assert!(matches!(
            verify_password("password", "not-a-valid-hash"),
            Err(AccademiaError::Crypto(_))
        ));
    }

    #[test]
    fn test_policy_length_bounds() {
        let policy = PasswordPolicy::new(8);
        assert!(policy.validate("short").is_err());
        assert!(policy.validate("long-enough").is_ok());
        assert!(policy.validate(&"x".repeat(129)).is_err());
        assert!(policy.validate("        ").is_err());
    }

    #[test]
    fn test_burn_verification_does_not_panic() {
        burn_verification("anything");
    }
}
