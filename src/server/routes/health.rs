//! Health check endpoint

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::storage::StorageHealthStatus;
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::Serialize;
use tracing::debug;

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}

/// Health status response
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: &'static str,
    pub storage: StorageHealthStatus,
    /// Whether permission checks are served from a loaded role matrix
    pub matrix_loaded: bool,
}

/// Basic health check endpoint
///
/// Reports `degraded` when storage is unreachable or the role matrix is not loaded.
pub async fn health_check(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    debug!("Health check requested");

    let storage = state.storage.health_check().await;
    let matrix_loaded = state.matrix.is_loaded();
    let status = if storage.healthy && matrix_loaded {
        "healthy"
    } else {
        "degraded"
    };

    let health_status = HealthStatus {
        status,
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION"),
        storage,
        matrix_loaded,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(health_status)))
}
