//! User persistence contract

use super::types::User;
use crate::utils::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Account storage used by the session layer and the admin CLI.
///
/// Implementations must treat `email` as already normalized and enforce its uniqueness;
/// `create_user` returns `AlreadyExists` on a duplicate.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_user_by_id(&self, user_id: Uuid) -> Result<Option<User>>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;

    async fn create_user(&self, user: &User) -> Result<User>;

    async fn update_user_password(&self, user_id: Uuid, password_hash: &str) -> Result<()>;

    async fn update_user_last_login(&self, user_id: Uuid) -> Result<()>;

    async fn set_user_role(&self, user_id: Uuid, role: &str) -> Result<()>;

    async fn set_user_active(&self, user_id: Uuid, is_active: bool) -> Result<()>;
}
