//! Authentication and authorization types

use crate::core::models::user::User;
use serde::Serialize;
use std::collections::BTreeSet;
use uuid::Uuid;

/// Who is making the request.
///
/// Either anonymous or an authenticated, active user. An inactive account can never be
/// the user of an authenticated context.
#[derive(Debug, Clone, Default)]
pub struct AuthContext {
    user: Option<User>,
    ip_address: Option<String>,
    user_agent: Option<String>,
}

impl AuthContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Authenticated context for `user`, anonymous if the account is inactive
    pub fn authenticated(user: User) -> Self {
        if user.is_active {
            Self {
                user: Some(user),
                ..Self::default()
            }
        } else {
            Self::anonymous()
        }
    }

    /// Attach client details recorded in audit entries
    pub fn with_request_info(
        mut self,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> Self {
        self.ip_address = ip_address;
        self.user_agent = user_agent;
        self
    }

    pub fn ip_address(&self) -> Option<&str> {
        self.ip_address.as_deref()
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn user_id(&self) -> Option<Uuid> {
        self.user.as_ref().map(|user| user.id)
    }

    /// Role string of the user, `None` when anonymous
    pub fn role(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.role.as_str())
    }
}

/// Credential presented with a request
#[derive(Debug, Clone, PartialEq)]
pub enum AuthMethod {
    /// Bearer session token
    Bearer(String),
    /// No authentication
    None,
}

impl AuthMethod {
    /// Interpret an Authorization header value
    pub fn from_header(header: Option<&str>) -> Self {
        header
            .and_then(crate::auth::jwt::SessionTokenHandler::extract_token_from_header)
            .map(|token| AuthMethod::Bearer(token.to_string()))
            .unwrap_or(AuthMethod::None)
    }
}

/// What the current caller can see and do, derived from the engine on demand
#[derive(Debug, Clone, Serialize)]
pub struct Capabilities {
    pub role: Option<String>,
    pub level: i32,
    pub sections: BTreeSet<String>,
    pub permissions: Vec<String>,
}
