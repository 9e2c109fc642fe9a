//! Request and response models for session endpoints

use crate::auth::Capabilities;
use crate::auth::jwt::SessionToken;
use crate::core::models::user::User;
use serde::{Deserialize, Serialize};

/// Sign-up request
#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

/// Sign-in request
#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Password change request
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Sign-up and sign-in response
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: User,
    pub session: SessionToken,
}

/// Current user with what it can see and do
#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub user: User,
    pub capabilities: Capabilities,
}
