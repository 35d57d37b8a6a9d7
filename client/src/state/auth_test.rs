use super::*;
use access::Role;

fn profile(role: Role) -> ProfileSnapshot {
    ProfileSnapshot { id: Some(1), email: "ops@example.com".to_owned(), name: Some("Ops".to_owned()), role }
}

#[test]
fn default_is_loading_and_anonymous() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
    assert_eq!(state.view(), SessionView::anonymous());
}

#[test]
fn loaded_session_exposes_profile() {
    let state = AuthState::loaded(StoredSession { token: Some("t".to_owned()), profile: Some(profile(Role::Admin)) });
    assert!(!state.loading);
    assert!(state.is_authenticated());
    assert!(state.view().is_admin());
    assert_eq!(state.display_name(), "Ops");
    assert_eq!(state.email(), "ops@example.com");
}

#[test]
fn token_without_profile_is_authenticated_but_not_admin() {
    let state = AuthState::loaded(StoredSession { token: Some("t".to_owned()), profile: None });
    assert!(state.is_authenticated());
    assert!(!state.view().is_admin());
    assert_eq!(state.display_name(), "Admin");
    assert_eq!(state.email(), "");
}
