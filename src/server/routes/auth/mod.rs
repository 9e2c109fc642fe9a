//! Session endpoints

mod models;
mod password;
mod session;
mod user;

pub use models::{
    AuthResponse, ChangePasswordRequest, CurrentUserResponse, SignInRequest, SignUpRequest,
};
pub use password::change_password;
pub use session::{sign_in, sign_out, sign_up};
pub use user::get_current_user;

use actix_web::web;

/// Configure authentication routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/signup", web::post().to(sign_up))
            .route("/signin", web::post().to(sign_in))
            .route("/signout", web::post().to(sign_out))
            .route("/me", web::get().to(get_current_user))
            .route("/change-password", web::post().to(change_password)),
    );
}
