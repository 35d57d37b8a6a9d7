use super::*;
use serde_json::json;

// =============================================================================
// from_login_user
// =============================================================================

#[test]
fn staff_flag_maps_to_admin() {
    let profile = ProfileSnapshot::from_login_user(&json!({"id": 7, "email": "ops@example.com", "is_staff": true}));
    assert_eq!(profile.role, Role::Admin);
    assert_eq!(profile.id, Some(7));
    assert_eq!(profile.email, "ops@example.com");
}

#[test]
fn each_admin_indicator_is_honored() {
    for user in [
        json!({"role": "admin"}),
        json!({"role": "Admin"}),
        json!({"is_admin": true}),
        json!({"is_superuser": true}),
    ] {
        assert_eq!(ProfileSnapshot::from_login_user(&user).role, Role::Admin, "{user}");
    }
}

#[test]
fn plain_user_is_regular() {
    let user = json!({"email": "u@example.com", "is_staff": false, "role": "member"});
    assert_eq!(ProfileSnapshot::from_login_user(&user).role, Role::Regular);
}

#[test]
fn truthy_strings_are_not_admin_flags() {
    let user = json!({"is_staff": "true"});
    assert_eq!(ProfileSnapshot::from_login_user(&user).role, Role::Regular);
}

#[test]
fn non_object_user_is_regular_and_empty() {
    let profile = ProfileSnapshot::from_login_user(&json!(true));
    assert_eq!(profile.role, Role::Regular);
    assert!(profile.email.is_empty());
    assert!(profile.name.is_none());
}

#[test]
fn name_prefers_fullname_then_first_last() {
    let full = ProfileSnapshot::from_login_user(&json!({"Fullname": "Ada Lovelace", "first_name": "A"}));
    assert_eq!(full.name.as_deref(), Some("Ada Lovelace"));

    let parts = ProfileSnapshot::from_login_user(&json!({"first_name": "Grace", "last_name": "Hopper"}));
    assert_eq!(parts.name.as_deref(), Some("Grace Hopper"));

    let none = ProfileSnapshot::from_login_user(&json!({"first_name": "  ", "last_name": ""}));
    assert!(none.name.is_none());
}

// =============================================================================
// display_name
// =============================================================================

#[test]
fn display_name_falls_back_to_email_local_part() {
    let profile = ProfileSnapshot { id: None, email: "jane@example.com".to_owned(), name: None, role: Role::Regular };
    assert_eq!(profile.display_name(), "jane");
}

#[test]
fn display_name_unknown_without_email() {
    let profile = ProfileSnapshot { id: None, email: String::new(), name: None, role: Role::Regular };
    assert_eq!(profile.display_name(), "Unknown User");
}
