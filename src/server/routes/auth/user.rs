//! Current user endpoint

use crate::auth::AuthContext;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};
use tracing::debug;

use super::models::CurrentUserResponse;

/// The signed-in user with role level, visible sections and effective permissions
pub async fn get_current_user(
    state: web::Data<AppState>,
    ctx: AuthContext,
) -> ActixResult<HttpResponse> {
    debug!("Get current user request");

    state.authorizer.require_auth().enforce(&ctx)?;

    let capabilities = state.auth.capabilities(&ctx);
    let Some(user) = ctx.user().cloned() else {
        return Ok(HttpResponse::Unauthorized()
            .json(ApiResponse::<()>::error("Unauthorized".to_string())));
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(CurrentUserResponse {
        user,
        capabilities,
    })))
}
