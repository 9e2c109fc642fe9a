//! Visible sections of the platform per role

use crate::core::models::user::UserRole;
use std::collections::BTreeSet;

/// Section only the platform owner can reach. Never hidden from `super_admin`.
pub const SUPERADMIN_SECTION: &str = "superadmin";

/// Sections the console knows how to render
pub const KNOWN_SECTIONS: [&str; 7] = [
    "dashboard",
    "normatives",
    "documents",
    "courses",
    "admin",
    SUPERADMIN_SECTION,
    "control_center",
];

/// Sections visible to a role when the matrix holds no entry for it
pub fn default_sections(role: UserRole) -> BTreeSet<String> {
    let sections: &[&str] = match role {
        UserRole::SuperAdmin => &KNOWN_SECTIONS,
        UserRole::Admin => &["dashboard", "normatives", "documents", "courses", "admin"],
        UserRole::Operator => &[
            "dashboard",
            "normatives",
            "documents",
            "courses",
            "control_center",
        ],
        UserRole::User => &["dashboard", "normatives", "documents", "courses"],
        UserRole::Guest => &["normatives"],
    };
    sections.iter().map(|s| s.to_string()).collect()
}
