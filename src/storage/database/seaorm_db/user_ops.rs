use crate::core::models::user::{User, UserStore};
use crate::utils::error::{AccademiaError, Result};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::*;
use tracing::debug;
use uuid::Uuid;

use super::super::entities::{self, user};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    async fn find_user_model(&self, user_id: Uuid) -> Result<user::Model> {
        entities::User::find_by_id(user_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AccademiaError::not_found(format!("User {} not found", user_id)))
    }

    async fn update_user<F>(&self, user_id: Uuid, apply: F) -> Result<()>
    where
        F: FnOnce(&mut user::ActiveModel) + Send,
    {
        let mut active_model: user::ActiveModel = self.find_user_model(user_id).await?.into();
        apply(&mut active_model);
        active_model.updated_at = Set(Utc::now().into());
        active_model.update(&self.db).await?;
        Ok(())
    }
}

#[async_trait]
impl UserStore for SeaOrmDatabase {
    async fn find_user_by_id(&self, user_id: Uuid) -> Result<Option<User>> {
        debug!("Finding user by ID: {}", user_id);

        let user_model = entities::User::find_by_id(user_id).one(&self.db).await?;
        Ok(user_model.map(|model| model.to_domain_user()))
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        debug!("Finding user by email");

        let user_model = entities::User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?;
        Ok(user_model.map(|model| model.to_domain_user()))
    }

    async fn create_user(&self, user: &User) -> Result<User> {
        debug!("Creating user: {}", user.id);

        let active_model = user::Model::from_domain_user(user);
        match entities::User::insert(active_model).exec(&self.db).await {
            Ok(_) => Ok(user.clone()),
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(AccademiaError::already_exists(
                    format!("An account for {} already exists", user.email),
                )),
                _ => Err(AccademiaError::Database(e)),
            },
        }
    }

    async fn update_user_password(&self, user_id: Uuid, password_hash: &str) -> Result<()> {
        debug!("Updating password for user: {}", user_id);

        let password_hash = password_hash.to_string();
        self.update_user(user_id, move |model| {
            model.password_hash = Set(password_hash);
        })
        .await
    }

    async fn update_user_last_login(&self, user_id: Uuid) -> Result<()> {
        debug!("Updating last login for user: {}", user_id);

        self.update_user(user_id, |model| {
            model.last_login_at = Set(Some(Utc::now().into()));
        })
        .await
    }

    async fn set_user_role(&self, user_id: Uuid, role: &str) -> Result<()> {
        debug!("Setting role of user {} to {}", user_id, role);

        let role = role.to_string();
        self.update_user(user_id, move |model| {
            model.role = Set(role);
        })
        .await
    }

    async fn set_user_active(&self, user_id: Uuid, is_active: bool) -> Result<()> {
        debug!("Setting active flag of user {} to {}", user_id, is_active);

        self.update_user(user_id, move |model| {
            model.is_active = Set(is_active);
        })
        .await
    }
}
