//! Password management operations

use super::system::AuthSystem;
use crate::utils::auth::{hash_password, verify_password};
use crate::utils::error::{AccademiaError, Result};
use crate::utils::logging::SecurityLogger;
use tracing::info;
use uuid::Uuid;

impl AuthSystem {
    /// Change a user's password after checking the current one
    pub async fn change_password(
        &self,
        user_id: Uuid,
        old_password: &str,
        new_password: &str,
    ) -> Result<()> {
        let user = self
            .users
            .find_user_by_id(user_id)
            .await?
            .ok_or_else(|| AccademiaError::not_found("User not found"))?;

        if !verify_password(old_password, &user.password_hash)? {
            SecurityLogger::log_auth_event(
                "change_password",
                Some(user_id),
                None,
                false,
                Some("wrong password"),
            );
            return Err(AccademiaError::InvalidCredentials);
        }

        self.password_policy().validate(new_password)?;

        let new_hash = hash_password(new_password)?;
        self.users.update_user_password(user_id, &new_hash).await?;

        info!("Password changed for user: {}", user_id);
        SecurityLogger::log_auth_event("change_password", Some(user_id), None, true, None);
        Ok(())
    }
}
