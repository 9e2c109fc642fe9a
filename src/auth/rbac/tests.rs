//! Tests for RBAC functionality

use super::*;
use crate::auth::matrix::{RoleMatrixEntry, RoleMatrixStore};
use crate::core::models::user::UserRole;
use crate::storage::memory::InMemoryMatrixPersistence;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

fn engine() -> RbacSystem {
    RbacSystem::new()
}

async fn engine_with_matrix(entries: Vec<RoleMatrixEntry>) -> (RbacSystem, Arc<RoleMatrixStore>) {
    let persistence = Arc::new(InMemoryMatrixPersistence::with_entries(entries));
    let store = Arc::new(RoleMatrixStore::new(persistence, Duration::from_secs(1)));
    store.load().await.unwrap();
    (RbacSystem::new().with_matrix(store.clone()), store)
}

#[test]
fn test_default_deny() {
    let rbac = engine();
    assert!(!rbac.has_permission("guest", "users", "read", None));
    assert!(!rbac.has_permission("user", "admin_panel", "access", None));
    assert!(!rbac.has_permission("operator", "normatives", "delete", None));
    assert!(!rbac.has_permission("student", "normatives", "read", None));
    assert!(!rbac.has_permission("", "normatives", "read", None));
}

#[test]
fn test_admin_lacks_normatives_delete() {
    let rbac = engine();
    assert!(rbac.has_permission("admin", "normatives", "update", None));
    assert!(!rbac.has_permission("admin", "normatives", "delete", None));
}

#[test]
fn test_wildcard_action_is_scoped_to_its_resource() {
    let rbac = engine();
    assert!(rbac.has_permission("admin", "documents", "delete", None));
    assert!(rbac.has_permission("admin", "courses", "publish", None));
    assert!(!rbac.has_permission("admin", "reports", "publish", None));
}

#[test]
fn test_wildcard_resource_matches_everything() {
    let rbac = RbacSystem::with_definitions(vec![RoleDefinition::new(
        UserRole::Operator,
        vec![Permission::all()],
    )]);
    assert!(rbac.has_permission("operator", "users", "delete", None));
    assert!(rbac.has_permission("operator", "anything", "at_all", None));
}

#[test]
fn test_conditional_match() {
    let rbac = engine();
    let own = PermissionContext::own(true);
    let not_own = PermissionContext::own(false);

    assert!(rbac.has_permission("user", "profile", "read", Some(&own)));
    assert!(!rbac.has_permission("user", "profile", "read", Some(&not_own)));
    assert!(!rbac.has_permission("user", "profile", "read", None));
    assert!(!rbac.has_permission("user", "profile", "read", Some(&PermissionContext::new())));
}

#[test]
fn test_guest_reads_only_public_normatives() {
    let rbac = engine();
    let public = PermissionContext::public(true);
    let internal = PermissionContext::public(false);
    assert!(rbac.has_permission("guest", "normatives", "read", Some(&public)));
    assert!(!rbac.has_permission("guest", "normatives", "read", Some(&internal)));
    assert!(!rbac.has_permission("guest", "normatives", "read", None));
}

#[test]
fn test_conditions_match_requires_strict_equality() {
    let permission = Permission::parse("reports.read:department=safety").unwrap();
    let matching = PermissionContext::new().with("department", "safety");
    let other = PermissionContext::new().with("department", "finance");
    let typed = PermissionContext::new().with("department", true);

    assert!(RbacSystem::conditions_match(&permission.conditions, Some(&matching)));
    assert!(!RbacSystem::conditions_match(&permission.conditions, Some(&other)));
    assert!(!RbacSystem::conditions_match(&permission.conditions, Some(&typed)));
    assert!(RbacSystem::conditions_match(&Conditions::new(), None));
}

#[test]
fn test_extra_context_does_not_prevent_match() {
    let rbac = engine();
    let context = PermissionContext::own(true).with(ConditionKey::Public, false);
    assert!(rbac.has_permission("user", "progress", "update", Some(&context)));
}

#[test]
fn test_super_admin_bypass() {
    let rbac = RbacSystem::with_definitions(Vec::new());
    assert!(rbac.has_permission("super_admin", "users", "delete", None));
    assert!(rbac.has_permission("super_admin", "normatives", "delete", None));
}

#[tokio::test]
async fn test_super_admin_bypass_with_emptied_matrix() {
    let mut emptied = RoleMatrixEntry::seeded(UserRole::SuperAdmin);
    emptied.permissions.clear();
    let (rbac, _) = engine_with_matrix(vec![emptied]).await;

    assert!(rbac.has_permission("super_admin", "users", "delete", None));
    assert!(rbac.has_permission("super_admin", "role_matrix", "update", None));
}

#[test]
fn test_monotonic_hierarchy() {
    let rbac = engine();
    for pair in UserRole::ALL.windows(2) {
        assert!(rbac.is_role_higher(pair[0].as_str(), pair[1].as_str()));
        assert!(!rbac.is_role_higher(pair[1].as_str(), pair[0].as_str()));
    }
    assert_eq!(rbac.get_role_level("student"), 0);
    assert!(rbac.is_role_higher("guest", "student"));
    assert!(!rbac.is_role_higher("admin", "admin"));
    assert!(rbac.has_role_level("admin", UserRole::Operator));
    assert!(!rbac.has_role_level("user", UserRole::Operator));
}

#[test]
fn test_inheritance_grants_parent_permissions() {
    let rbac = RbacSystem::with_definitions(vec![
        RoleDefinition::new(UserRole::User, vec![Permission::new("courses", "read")]),
        RoleDefinition::new(UserRole::Operator, vec![Permission::new("control_center", "access")])
            .inheriting(vec![UserRole::User]),
    ]);

    assert!(rbac.has_permission("operator", "courses", "read", None));
    assert!(!rbac.has_permission("user", "control_center", "access", None));

    let names: Vec<String> = rbac
        .get_role_permissions("operator")
        .iter()
        .map(Permission::name)
        .collect();
    assert_eq!(names, vec!["control_center.access", "courses.read"]);
}

#[test]
fn test_inheritance_cycle_terminates() {
    let rbac = RbacSystem::with_definitions(vec![
        RoleDefinition::new(UserRole::User, vec![Permission::new("courses", "read")])
            .inheriting(vec![UserRole::Operator]),
        RoleDefinition::new(UserRole::Operator, vec![Permission::new("documents", "read")])
            .inheriting(vec![UserRole::User, UserRole::Operator]),
    ]);

    assert!(rbac.has_permission("user", "documents", "read", None));
    assert!(rbac.has_permission("operator", "courses", "read", None));
    assert!(!rbac.has_permission("user", "users", "delete", None));
    assert_eq!(rbac.get_role_permissions("user").len(), 2);
}

#[test]
fn test_get_role_permissions() {
    let rbac = engine();
    assert_eq!(rbac.get_role_permissions("user").len(), 7);
    assert!(rbac.get_role_permissions("student").is_empty());
    assert!(
        rbac.get_role_permissions("super_admin")
            .contains(&Permission::all())
    );
}

#[test]
fn test_check_permission_detailed() {
    let rbac = engine();

    let granted = rbac.check_permission_detailed(
        "operator",
        "profile",
        "update",
        Some(&PermissionContext::own(true)),
    );
    assert!(granted.granted);
    assert_eq!(granted.granted_by.as_deref(), Some("profile.update:own"));

    let denied = rbac.check_permission_detailed("operator", "users", "delete", None);
    assert!(!denied.granted);
    assert_eq!(
        denied.denial_reason.as_deref(),
        Some("Missing permission: users.delete")
    );

    let unknown = rbac.check_permission_detailed("student", "users", "read", None);
    assert!(!unknown.granted);
    assert!(unknown.denial_reason.unwrap().contains("Unknown role"));
}

#[test]
fn test_filter_by_permissions_is_stable() {
    let rbac = engine();

    let items = vec![("a", true), ("b", false), ("c", true), ("d", true)];
    let kept = rbac.filter_by_permissions_with(items, "user", "progress", "read", |item| {
        Some(PermissionContext::own(item.1))
    });
    let names: Vec<&str> = kept.iter().map(|item| item.0).collect();
    assert_eq!(names, vec!["a", "c", "d"]);

    let all = rbac.filter_by_permissions(vec![1, 2, 3], "user", "normatives", "read");
    assert_eq!(all, vec![1, 2, 3]);

    let none = rbac.filter_by_permissions(vec![1, 2, 3], "guest", "documents", "read");
    assert!(none.is_empty());
}

#[test]
fn test_default_sections() {
    let rbac = engine();

    let guest: Vec<String> = rbac.visible_sections("guest").into_iter().collect();
    assert_eq!(guest, vec!["normatives"]);

    assert!(rbac.can_view_section("super_admin", SUPERADMIN_SECTION));
    assert!(!rbac.can_view_section("admin", SUPERADMIN_SECTION));
    assert!(rbac.can_view_section("operator", "control_center"));
    assert!(!rbac.can_view_section("user", "control_center"));
    assert!(rbac.visible_sections("student").is_empty());
    assert_eq!(rbac.visible_sections("super_admin").len(), KNOWN_SECTIONS.len());
}

#[tokio::test]
async fn test_matrix_overrides_static_table() {
    let mut admin = RoleMatrixEntry::seeded(UserRole::Admin);
    admin.permissions.remove("users.read");
    admin.permissions.insert("reports.read".to_string());
    admin.sections = BTreeSet::from(["dashboard".to_string()]);
    let (rbac, _) = engine_with_matrix(vec![admin]).await;

    assert!(!rbac.has_permission("admin", "users", "read", None));
    assert!(rbac.has_permission("admin", "reports", "read", None));
    assert_eq!(rbac.visible_sections("admin").len(), 1);
    assert!(rbac.has_permission("user", "normatives", "read", None));
}

#[tokio::test]
async fn test_fail_closed_when_matrix_cannot_load() {
    let persistence = Arc::new(InMemoryMatrixPersistence::new());
    persistence.set_unavailable(true);
    let store = Arc::new(RoleMatrixStore::new(persistence, Duration::from_secs(1)));
    assert!(store.load().await.is_err());

    let rbac = RbacSystem::new().with_matrix(store);
    assert!(!rbac.has_permission("admin", "users", "read", None));
    assert!(!rbac.has_permission("user", "normatives", "read", None));
    assert!(rbac.get_role_permissions("admin").is_empty());
    assert!(rbac.visible_sections("admin").is_empty());
    assert!(rbac.has_permission("super_admin", "users", "read", None));
    assert!(rbac.can_view_section("super_admin", SUPERADMIN_SECTION));
}

#[test]
fn test_parse_permission_names() {
    let simple = Permission::parse("normatives.read").unwrap();
    assert_eq!(simple, Permission::new("normatives", "read"));

    let own = Permission::parse("profile.read:own").unwrap();
    assert_eq!(own.conditions.get(&ConditionKey::Own), Some(&serde_json::Value::Bool(true)));

    assert_eq!(Permission::parse("*").unwrap(), Permission::all());
    assert_eq!(Permission::parse("documents.*").unwrap().action, "*");

    let custom = Permission::parse("reports.read:level=3,department=safety").unwrap();
    assert_eq!(
        custom.conditions.get(&ConditionKey::Custom("level".to_string())),
        Some(&serde_json::json!(3))
    );
    assert_eq!(custom.name(), "reports.read:department=safety,level=3");
}

#[test]
fn test_permission_names_are_canonical() {
    let parsed: Permission = "profile.read:public,own".parse().unwrap();
    assert_eq!(parsed.name(), "profile.read:own,public");

    let negated = Permission::parse("normatives.read:public=false").unwrap();
    assert_eq!(negated.name(), "normatives.read:public=false");
    assert_eq!(Permission::parse(&negated.name()).unwrap(), negated);
}

#[test]
fn test_string_condition_values_survive_names() {
    let permissions = [
        Permission::new("reports", "read").with_condition("level", "5"),
        Permission::new("reports", "read").with_condition("flag", "true"),
        Permission::new("reports", "read").with_condition("level", 5),
        Permission::new("reports", "read").with_condition("tags", "a,b"),
        Permission::new("reports", "read").with_condition("quote", "say \"hi\""),
        Permission::new("reports", "read")
            .with_condition("department", "safety")
            .with_condition(ConditionKey::Own, true),
    ];

    for permission in permissions {
        let name = permission.name();
        assert_eq!(Permission::parse(&name).unwrap(), permission, "{}", name);
    }

    let stored = Permission::parse(
        &Permission::new("reports", "read")
            .with_condition("level", "5")
            .name(),
    )
    .unwrap();
    let context = PermissionContext::new().with("level", "5");
    assert!(RbacSystem::conditions_match(&stored.conditions, Some(&context)));
    assert_eq!(stored.name(), "reports.read:level=\"5\"");
}

#[test]
fn test_parse_rejects_malformed_names() {
    for name in [
        "users",
        "users.",
        ".read",
        "us ers.read",
        "users.read:",
        "users.read:own,,public",
        "users.re*d",
        "users.read:=1",
    ] {
        assert!(Permission::parse(name).is_err(), "{} should be rejected", name);
    }
}

#[test]
fn test_default_definitions_cover_every_role() {
    let definitions = default_role_definitions();
    assert_eq!(definitions.len(), UserRole::ALL.len());
    for definition in &definitions {
        assert_eq!(definition.level, definition.role.level());
        assert!(definition.inherits_from.is_empty());
    }
}
