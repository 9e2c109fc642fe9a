//! Core authentication system implementation

use super::jwt::SessionTokenHandler;
use super::rbac::RbacSystem;
use super::types::{AuthContext, AuthMethod, Capabilities};
use crate::config::AuthConfig;
use crate::core::models::user::{UserRole, UserStore};
use crate::utils::auth::PasswordPolicy;
use crate::utils::error::{AccademiaError, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Main authentication system
#[derive(Clone)]
pub struct AuthSystem {
    /// Authentication configuration
    pub(super) config: Arc<AuthConfig>,
    /// Account storage
    pub(super) users: Arc<dyn UserStore>,
    /// Session token handler
    pub(super) tokens: Arc<SessionTokenHandler>,
    /// Permission engine
    pub(super) rbac: Arc<RbacSystem>,
    /// Role given to self-registered users
    pub(super) default_role: UserRole,
}

impl AuthSystem {
    /// Create a new authentication system
    pub fn new(
        config: &AuthConfig,
        users: Arc<dyn UserStore>,
        rbac: Arc<RbacSystem>,
    ) -> Result<Self> {
        info!("Initializing authentication system");

        let default_role = config.rbac.default_role.parse().map_err(|_| {
            AccademiaError::config(format!("Unknown default role: {}", config.rbac.default_role))
        })?;

        Ok(Self {
            config: Arc::new(config.clone()),
            users,
            tokens: Arc::new(SessionTokenHandler::new(config)),
            rbac,
            default_role,
        })
    }

    /// User id of a valid session token
    pub fn verify_token(&self, token: &str) -> Option<Uuid> {
        self.tokens.verify_token(token)
    }

    /// Resolve a session token to a context, looking the user up once.
    /// Anything short of a valid token for an existing active user is anonymous.
    pub async fn authenticate(&self, token: &str) -> AuthContext {
        let Some(user_id) = self.verify_token(token) else {
            return AuthContext::anonymous();
        };

        match self.users.find_user_by_id(user_id).await {
            Ok(Some(user)) if user.is_active => {
                debug!("Authenticated user {}", user_id);
                AuthContext::authenticated(user)
            }
            Ok(Some(_)) => {
                debug!("Token for inactive user {}", user_id);
                AuthContext::anonymous()
            }
            Ok(None) => {
                debug!("Token for unknown user {}", user_id);
                AuthContext::anonymous()
            }
            Err(e) => {
                warn!("User lookup failed during authentication: {}", e);
                AuthContext::anonymous()
            }
        }
    }

    /// Authenticate a request credential
    pub async fn authenticate_method(&self, method: &AuthMethod) -> AuthContext {
        match method {
            AuthMethod::Bearer(token) => self.authenticate(token).await,
            AuthMethod::None => AuthContext::anonymous(),
        }
    }

    /// Role level, visible sections and effective permission names of the caller
    pub fn capabilities(&self, context: &AuthContext) -> Capabilities {
        match context.role() {
            Some(role) => Capabilities {
                role: Some(role.to_string()),
                level: self.rbac.get_role_level(role),
                sections: self.rbac.visible_sections(role),
                permissions: self
                    .rbac
                    .get_role_permissions(role)
                    .iter()
                    .map(|permission| permission.name())
                    .collect(),
            },
            None => Capabilities {
                role: None,
                level: 0,
                sections: Default::default(),
                permissions: Vec::new(),
            },
        }
    }

    pub(super) fn password_policy(&self) -> PasswordPolicy {
        PasswordPolicy::new(self.config.min_password_length)
    }

    /// Get authentication configuration
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Get session token handler
    pub fn tokens(&self) -> &SessionTokenHandler {
        &self.tokens
    }

    /// Get RBAC system
    pub fn rbac(&self) -> &Arc<RbacSystem> {
        &self.rbac
    }

    /// Get user store
    pub fn users(&self) -> &Arc<dyn UserStore> {
        &self.users
    }
}

impl std::fmt::Debug for AuthSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSystem")
            .field("tokens", &self.tokens)
            .field("rbac", &self.rbac)
            .field("default_role", &self.default_role)
            .finish()
    }
}
