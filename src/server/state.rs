//! Application state shared across HTTP handlers

use crate::auth::matrix::RoleMatrixStore;
use crate::auth::rbac::RbacSystem;
use crate::auth::{AuthSystem, Authorizer};
use crate::config::Config;
use crate::monitoring::{Notice, NoticeBus, NoticeCategory, NoticeSeverity};
use crate::storage::StorageLayer;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{info, warn};

/// HTTP server state shared across handlers
///
/// Every field is cheap to clone; the role matrix snapshot behind `matrix` is shared by
/// the permission engine and the admin routes.
#[derive(Clone)]
pub struct AppState {
    /// Configuration (shared read-only)
    pub config: Arc<Config>,
    /// Authentication system
    pub auth: Arc<AuthSystem>,
    /// Guards and audited execution
    pub authorizer: Arc<Authorizer>,
    /// Role matrix store
    pub matrix: Arc<RoleMatrixStore>,
    /// Storage layer
    pub storage: Arc<StorageLayer>,
    /// Operational notices
    pub notices: NoticeBus,
}

impl AppState {
    /// Wire the auth system to `storage` and load the role matrix.
    ///
    /// A matrix that cannot be loaded does not prevent startup: permission checks fail
    /// closed until a refresh succeeds.
    pub async fn new(config: Config, storage: StorageLayer) -> Result<Self> {
        let notices = NoticeBus::default();
        let matrix = Arc::new(RoleMatrixStore::new(
            storage.matrix.clone(),
            config.auth.rbac.persistence_timeout(),
        ));

        match matrix.load().await {
            Ok(snapshot) => info!("Role matrix ready with {} roles", snapshot.len()),
            Err(e) => {
                warn!("Role matrix unavailable, denying non-owner access: {}", e);
                notices.emit(Notice::new(
                    NoticeCategory::MatrixUnavailable,
                    NoticeSeverity::Error,
                    format!("Role matrix could not be loaded: {}", e),
                ));
            }
        }

        let rbac = Arc::new(RbacSystem::new().with_matrix(matrix.clone()));
        let auth = AuthSystem::new(&config.auth, storage.users.clone(), rbac.clone())?;
        let authorizer = Authorizer::new(rbac, storage.audit.clone(), notices.clone());

        Ok(Self {
            config: Arc::new(config),
            auth: Arc::new(auth),
            authorizer: Arc::new(authorizer),
            matrix,
            storage: Arc::new(storage),
            notices,
        })
    }

    /// Get configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
