//! In-memory user store

use crate::core::models::user::{User, UserStore};
use crate::utils::error::{AccademiaError, Result};
use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }

    fn update<F>(&self, user_id: Uuid, apply: F) -> Result<()>
    where
        F: FnOnce(&mut User),
    {
        let mut users = self.users.write();
        let user = users
            .get_mut(&user_id)
            .ok_or_else(|| AccademiaError::not_found(format!("User {} not found", user_id)))?;
        apply(user);
        user.updated_at = Utc::now();
        Ok(())
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_user_by_id(&self, user_id: Uuid) -> Result<Option<User>> {
        Ok(self.users.read().get(&user_id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .read()
            .values()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn create_user(&self, user: &User) -> Result<User> {
        let mut users = self.users.write();
        if users.values().any(|existing| existing.email == user.email) {
            return Err(AccademiaError::already_exists(format!(
                "User with email {} already exists",
                user.email
            )));
        }
        users.insert(user.id, user.clone());
        Ok(user.clone())
    }

    async fn update_user_password(&self, user_id: Uuid, password_hash: &str) -> Result<()> {
        self.update(user_id, |user| user.password_hash = password_hash.to_string())
    }

    async fn update_user_last_login(&self, user_id: Uuid) -> Result<()> {
        self.update(user_id, |user| user.last_login_at = Some(Utc::now()))
    }

    async fn set_user_role(&self, user_id: Uuid, role: &str) -> Result<()> {
        self.update(user_id, |user| user.role = role.to_string())
    }

    async fn set_user_active(&self, user_id: Uuid, is_active: bool) -> Result<()> {
        self.update(user_id, |user| user.is_active = is_active)
    }
}
