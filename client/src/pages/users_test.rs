use super::*;

fn user(id: i64, is_active: Option<bool>) -> ManagedUser {
    ManagedUser {
        id,
        fullname: None,
        email: format!("u{id}@example.com"),
        date_joined: String::new(),
        is_active,
    }
}

#[test]
fn set_active_updates_only_matching_row() {
    let mut users = vec![user(1, Some(true)), user(2, None)];
    set_active(&mut users, 2, false);
    assert!(users[0].active());
    assert!(!users[1].active());
}

#[test]
fn set_active_ignores_unknown_id() {
    let mut users = vec![user(1, Some(true))];
    set_active(&mut users, 9, false);
    assert!(users[0].active());
}

#[test]
fn status_labels() {
    assert_eq!(status_label(true), "Active");
    assert_eq!(status_label(false), "Blocked");
}
