//! Audit log endpoint

use crate::auth::AuthContext;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};

use super::models::AuditQuery;

/// Most recent audit entries, newest first, capped at `audit.recent_limit`
pub async fn recent_audit(
    state: web::Data<AppState>,
    ctx: AuthContext,
    query: web::Query<AuditQuery>,
) -> ActixResult<HttpResponse> {
    state
        .authorizer
        .require_permission("audit_logs", "read", None)
        .enforce(&ctx)?;

    let cap = state.config.audit.recent_limit;
    let limit = query.limit.unwrap_or(cap).clamp(1, cap);
    let entries = state.storage.audit.recent(limit).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(entries)))
}
