//! User module tests

use super::types::{User, UserRole};

#[test]
fn test_user_creation() {
    let user = User::new(
        "mario.rossi@example.it".to_string(),
        "Mario Rossi".to_string(),
        "hashed_password".to_string(),
        UserRole::User,
    );

    assert_eq!(user.email, "mario.rossi@example.it");
    assert_eq!(user.role, "user");
    assert!(user.is_active);
    assert!(user.last_login_at.is_none());
    assert_eq!(user.role_kind(), Some(UserRole::User));
}

#[test]
fn test_unknown_role_string_has_no_kind() {
    let mut user = User::new(
        "a@example.it".to_string(),
        "A".to_string(),
        String::new(),
        UserRole::Guest,
    );
    user.role = "student".to_string();
    assert_eq!(user.role_kind(), None);
}

#[test]
fn test_role_levels_strictly_decrease() {
    for pair in UserRole::ALL.windows(2) {
        assert!(pair[0].level() > pair[1].level());
    }
    assert_eq!(UserRole::SuperAdmin.level(), 100);
    assert_eq!(UserRole::Guest.level(), 20);
}

#[test]
fn test_role_round_trip_through_str() {
    for role in UserRole::ALL {
        let parsed: UserRole = role.as_str().parse().unwrap();
        assert_eq!(parsed, role);
        assert_eq!(role.to_string(), role.as_str());
    }
    assert!("SuperAdmin".parse::<UserRole>().is_err());
}

#[test]
fn test_password_hash_not_serialized() {
    let user = User::new(
        "b@example.it".to_string(),
        "B".to_string(),
        "secret-hash".to_string(),
        UserRole::Admin,
    );
    let json = serde_json::to_string(&user).unwrap();
    assert!(!json.contains("secret-hash"));
    assert!(json.contains("\"role\":\"admin\""));
}
