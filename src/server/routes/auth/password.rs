//! Password change endpoint

use crate::auth::AuthContext;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::AccademiaError;
use actix_web::{HttpResponse, Result as ActixResult, web};

use super::models::ChangePasswordRequest;

/// Change the signed-in user's password
pub async fn change_password(
    state: web::Data<AppState>,
    ctx: AuthContext,
    request: web::Json<ChangePasswordRequest>,
) -> ActixResult<HttpResponse> {
    let user_id = ctx
        .user_id()
        .ok_or_else(|| AccademiaError::unauthorized("Authentication required"))?;

    state
        .auth
        .change_password(user_id, &request.current_password, &request.new_password)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Password changed")))
}
