//! Sign-up, sign-in and sign-out endpoints

use crate::auth::AuthMethod;
use crate::server::middleware::extract_auth_method;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use tracing::info;

use super::models::{AuthResponse, SignInRequest, SignUpRequest};

/// Register a new account and return its first session
pub async fn sign_up(
    state: web::Data<AppState>,
    request: web::Json<SignUpRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();
    let (user, session) = state
        .auth
        .sign_up(&request.email, &request.password, &request.full_name)
        .await?;

    info!("User registered: {}", user.id);
    Ok(HttpResponse::Created().json(ApiResponse::success(AuthResponse { user, session })))
}

/// Exchange credentials for a session
pub async fn sign_in(
    state: web::Data<AppState>,
    request: web::Json<SignInRequest>,
) -> ActixResult<HttpResponse> {
    let (user, session) = state
        .auth
        .sign_in(&request.email, &request.password)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(AuthResponse { user, session })))
}

/// End the session. The client discards its token.
pub async fn sign_out(state: web::Data<AppState>, req: HttpRequest) -> ActixResult<HttpResponse> {
    if let AuthMethod::Bearer(token) = extract_auth_method(req.headers()) {
        state.auth.sign_out(&token).await?;
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success("Signed out")))
}
