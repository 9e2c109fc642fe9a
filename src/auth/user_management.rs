//! Sign-up, sign-in and sign-out

use super::jwt::SessionToken;
use super::system::AuthSystem;
use crate::core::models::user::{User, UserRole};
use crate::utils::auth::{burn_verification, hash_password, verify_password};
use crate::utils::error::{AccademiaError, Result};
use crate::utils::logging::SecurityLogger;
use crate::utils::{is_valid_email, normalize_email};
use tracing::{info, warn};

const MAX_FULL_NAME_LEN: usize = 200;

impl AuthSystem {
    /// Register a new account with the default role and open a session for it
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<(User, SessionToken)> {
        let user = self
            .create_user(email, password, full_name, self.default_role)
            .await?;
        let session = self.tokens.issue_session(user.id)?;

        SecurityLogger::log_auth_event("sign_up", Some(user.id), Some(&user.email), true, None);
        Ok((user, session))
    }

    /// Create an account with an explicit role
    pub async fn create_user(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
        role: UserRole,
    ) -> Result<User> {
        let email = normalize_email(email);
        if !is_valid_email(&email) {
            return Err(AccademiaError::validation("Invalid email address"));
        }

        let full_name = full_name.trim();
        if full_name.is_empty() {
            return Err(AccademiaError::validation("Full name cannot be empty"));
        }
        if full_name.chars().count() > MAX_FULL_NAME_LEN {
            return Err(AccademiaError::validation(format!(
                "Full name must be at most {} characters long",
                MAX_FULL_NAME_LEN
            )));
        }

        self.password_policy().validate(password)?;

        if self.users.find_user_by_email(&email).await?.is_some() {
            return Err(AccademiaError::already_exists(format!(
                "An account for {} already exists",
                email
            )));
        }

        let password_hash = hash_password(password)?;
        let user = User::new(email, full_name.to_string(), password_hash, role);
        let user = self.users.create_user(&user).await?;

        info!("Created user {} with role {}", user.id, user.role);
        Ok(user)
    }

    /// Check credentials and open a session.
    ///
    /// Unknown email, wrong password and inactive account are indistinguishable to the
    /// caller.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(User, SessionToken)> {
        let email = normalize_email(email);

        let Some(mut user) = self.users.find_user_by_email(&email).await? else {
            burn_verification(password);
            SecurityLogger::log_auth_event(
                "sign_in",
                None,
                Some(&email),
                false,
                Some("unknown email"),
            );
            return Err(AccademiaError::InvalidCredentials);
        };

        let password_ok = match verify_password(password, &user.password_hash) {
            Ok(ok) => ok,
            Err(e) => {
                warn!("Stored password hash for {} is unusable: {}", user.id, e);
                false
            }
        };

        if !password_ok {
            SecurityLogger::log_auth_event(
                "sign_in",
                Some(user.id),
                Some(&email),
                false,
                Some("wrong password"),
            );
            return Err(AccademiaError::InvalidCredentials);
        }

        if !user.is_active {
            SecurityLogger::log_auth_event(
                "sign_in",
                Some(user.id),
                Some(&email),
                false,
                Some("inactive account"),
            );
            return Err(AccademiaError::InvalidCredentials);
        }

        let session = self.tokens.issue_session(user.id)?;

        if let Err(e) = self.users.update_user_last_login(user.id).await {
            warn!("Failed to record last login for {}: {}", user.id, e);
        } else {
            user.record_login();
        }

        SecurityLogger::log_auth_event("sign_in", Some(user.id), Some(&email), true, None);
        Ok((user, session))
    }

    /// End a session. Tokens are not revoked server-side; the client discards its copy.
    pub async fn sign_out(&self, token: &str) -> Result<()> {
        let user_id = self.verify_token(token);
        SecurityLogger::log_auth_event("sign_out", user_id, None, user_id.is_some(), None);
        Ok(())
    }
}
