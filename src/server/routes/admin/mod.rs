//! Role matrix administration endpoints
//!
//! Reading the matrix needs `admin_panel.access`; editing it needs `admin_panel.roles`,
//! which only `super_admin` holds by default. Every edit goes through the audited path.

mod audit;
mod models;
mod roles;

pub use audit::recent_audit;
pub use models::{AuditQuery, PermissionUpdate, RoleView, SectionUpdate};
pub use roles::{list_roles, refresh_roles, update_permission, update_section};

use actix_web::web;

/// Configure admin routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .route("/roles", web::get().to(list_roles))
            .route("/roles/refresh", web::post().to(refresh_roles))
            .route("/roles/{role}/permissions", web::put().to(update_permission))
            .route("/roles/{role}/sections", web::put().to(update_section))
            .route("/audit", web::get().to(recent_audit)),
    );
}
