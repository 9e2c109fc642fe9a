use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// User ID (UUID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Email address (unique, normalized)
    #[sea_orm(unique)]
    pub email: String,

    /// Display name
    pub full_name: String,

    /// Password hash
    pub password_hash: String,

    /// User role
    pub role: String,

    /// Whether the account may sign in
    pub is_active: bool,

    /// Last login timestamp
    pub last_login_at: Option<DateTimeWithTimeZone>,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion methods between SeaORM model and our domain model
impl Model {
    /// Convert SeaORM model to domain user model
    pub fn to_domain_user(&self) -> crate::core::models::user::User {
        crate::core::models::user::User {
            id: self.id,
            email: self.email.clone(),
            full_name: self.full_name.clone(),
            role: self.role.clone(),
            is_active: self.is_active,
            password_hash: self.password_hash.clone(),
            created_at: self.created_at.naive_utc().and_utc(),
            updated_at: self.updated_at.naive_utc().and_utc(),
            last_login_at: self.last_login_at.map(|dt| dt.naive_utc().and_utc()),
        }
    }

    /// Convert domain user model to SeaORM active model
    pub fn from_domain_user(user: &crate::core::models::user::User) -> ActiveModel {
        ActiveModel {
            id: Set(user.id),
            email: Set(user.email.clone()),
            full_name: Set(user.full_name.clone()),
            password_hash: Set(user.password_hash.clone()),
            role: Set(user.role.clone()),
            is_active: Set(user.is_active),
            last_login_at: Set(user.last_login_at.map(|dt| dt.into())),
            created_at: Set(user.created_at.into()),
            updated_at: Set(user.updated_at.into()),
        }
    }
}
