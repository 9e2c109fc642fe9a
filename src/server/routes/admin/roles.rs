//! Role matrix endpoints

use crate::auth::AuthContext;
use crate::core::models::user::UserRole;
use crate::monitoring::{Notice, NoticeCategory, NoticeSeverity};
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde_json::json;
use tracing::info;

use super::models::{PermissionUpdate, RoleView, SectionUpdate};

fn role_views(state: &AppState) -> Vec<RoleView> {
    let rbac = state.authorizer.rbac();
    let snapshot = state.matrix.snapshot();

    UserRole::ALL
        .iter()
        .map(|role| {
            let name = role.as_str();
            RoleView {
                role: name.to_string(),
                level: role.level(),
                permissions: rbac
                    .get_role_permissions(name)
                    .iter()
                    .map(|permission| permission.name())
                    .collect(),
                sections: rbac.visible_sections(name),
                version: snapshot
                    .as_ref()
                    .and_then(|matrix| matrix.entry(name).map(|entry| entry.version)),
            }
        })
        .collect()
}

fn role_view(state: &AppState, role: &str) -> Option<RoleView> {
    role_views(state).into_iter().find(|view| view.role == role)
}

fn matrix_changed(
    state: &AppState,
    ctx: &AuthContext,
    message: String,
    details: serde_json::Value,
) {
    state.notices.emit(
        Notice::new(NoticeCategory::MatrixChanged, NoticeSeverity::Info, message).with_metadata(
            json!({
                "changed_by": ctx.user_id(),
                "change": details,
            }),
        ),
    );
}

/// The whole matrix
pub async fn list_roles(
    state: web::Data<AppState>,
    ctx: AuthContext,
) -> ActixResult<HttpResponse> {
    state.authorizer.require_admin_access(None).enforce(&ctx)?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(role_views(&state))))
}

/// Grant or revoke a permission for a role
pub async fn update_permission(
    state: web::Data<AppState>,
    ctx: AuthContext,
    path: web::Path<String>,
    request: web::Json<PermissionUpdate>,
) -> ActixResult<HttpResponse> {
    let role = path.into_inner();
    let update = request.into_inner();
    let details = json!({
        "role": role,
        "permission": update.permission,
        "granted": update.granted,
    });

    let matrix = state.matrix.clone();
    state
        .authorizer
        .execute_with_permission_check(
            &ctx,
            "admin_panel",
            "roles",
            || async {
                matrix
                    .update_role_permission(&role, &update.permission, update.granted)
                    .await
            },
            None,
            Some(details.clone()),
        )
        .await?;

    info!(
        "Role {} permission {} set to {}",
        role, update.permission, update.granted
    );
    matrix_changed(
        &state,
        &ctx,
        format!("Permission {} updated for {}", update.permission, role),
        details,
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(role_view(&state, &role))))
}

/// Show or hide a section for a role
pub async fn update_section(
    state: web::Data<AppState>,
    ctx: AuthContext,
    path: web::Path<String>,
    request: web::Json<SectionUpdate>,
) -> ActixResult<HttpResponse> {
    let role = path.into_inner();
    let update = request.into_inner();
    let details = json!({
        "role": role,
        "section": update.section,
        "visible": update.visible,
    });

    let matrix = state.matrix.clone();
    state
        .authorizer
        .execute_with_permission_check(
            &ctx,
            "admin_panel",
            "roles",
            || async {
                matrix
                    .update_role_section(&role, &update.section, update.visible)
                    .await
            },
            None,
            Some(details.clone()),
        )
        .await?;

    info!(
        "Role {} section {} set to {}",
        role, update.section, update.visible
    );
    matrix_changed(
        &state,
        &ctx,
        format!("Section {} updated for {}", update.section, role),
        details,
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(role_view(&state, &role))))
}

/// Reload the matrix from storage
pub async fn refresh_roles(
    state: web::Data<AppState>,
    ctx: AuthContext,
) -> ActixResult<HttpResponse> {
    let matrix = state.matrix.clone();
    state
        .authorizer
        .execute_with_permission_check(
            &ctx,
            "admin_panel",
            "roles",
            || async { matrix.refresh().await },
            None,
            Some(json!({ "operation": "refresh" })),
        )
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(role_views(&state))))
}
