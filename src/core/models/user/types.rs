//! Core user types and enums

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: Uuid,
    /// Email address (unique, stored normalized)
    pub email: String,
    /// Display name
    pub full_name: String,
    /// Role name as stored. Strings that do not parse into a [`UserRole`] are unknown
    /// roles and carry no permissions.
    pub role: String,
    /// Inactive accounts cannot sign in and authenticate as anonymous
    pub is_active: bool,
    /// Password hash
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
    /// Last successful sign-in
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Create a new active user
    pub fn new(email: String, full_name: String, password_hash: String, role: UserRole) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            full_name,
            role: role.as_str().to_string(),
            is_active: true,
            password_hash,
            created_at: now,
            updated_at: now,
            last_login_at: None,
        }
    }

    /// Parsed role, `None` for unknown role strings
    pub fn role_kind(&self) -> Option<UserRole> {
        self.role.parse().ok()
    }

    /// Update the modification timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Record a successful sign-in
    pub fn record_login(&mut self) {
        let now = Utc::now();
        self.last_login_at = Some(now);
        self.updated_at = now;
    }
}

/// User role, ordered from most to least privileged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Platform owner, implicitly granted everything
    SuperAdmin,
    /// Administrator
    Admin,
    /// Control center operator
    Operator,
    /// Regular learner
    User,
    /// Unregistered visitor
    Guest,
}

impl UserRole {
    /// All roles, highest first
    pub const ALL: [UserRole; 5] = [
        UserRole::SuperAdmin,
        UserRole::Admin,
        UserRole::Operator,
        UserRole::User,
        UserRole::Guest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "super_admin",
            UserRole::Admin => "admin",
            UserRole::Operator => "operator",
            UserRole::User => "user",
            UserRole::Guest => "guest",
        }
    }

    /// Hierarchy level. Strictly decreasing down the hierarchy.
    pub fn level(&self) -> i32 {
        match self {
            UserRole::SuperAdmin => 100,
            UserRole::Admin => 80,
            UserRole::Operator => 60,
            UserRole::User => 40,
            UserRole::Guest => 20,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super_admin" => Ok(UserRole::SuperAdmin),
            "admin" => Ok(UserRole::Admin),
            "operator" => Ok(UserRole::Operator),
            "user" => Ok(UserRole::User),
            "guest" => Ok(UserRole::Guest),
            _ => Err(format!("Invalid user role: {}", s)),
        }
    }
}
