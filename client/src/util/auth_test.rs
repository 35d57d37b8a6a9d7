use super::*;
use access::{MemoryStorage, ProfileSnapshot, Role};

fn outcome(role: Role) -> LoginOutcome {
    LoginOutcome {
        token: "jwt".to_owned(),
        profile: ProfileSnapshot { id: Some(4), email: "a@b.co".to_owned(), name: None, role },
    }
}

#[test]
fn guard_decision_uses_default_table() {
    let admin = SessionView::signed_in(Some(Role::Admin));
    assert_eq!(guard_decision("/admin/faq-management", admin), Decision::Allow);
    assert_eq!(guard_decision("/admin", SessionView::anonymous()), Decision::RedirectToLogin);
    assert_eq!(guard_decision("/login", admin), Decision::RedirectToAdmin);
    assert_eq!(guard_decision("/admin/settings", SessionView::signed_in(None)), Decision::RedirectToHome);
}

#[test]
fn regular_login_never_opens_the_admin_area() {
    let on_login = evaluate_gate("/login", SessionView::anonymous());
    assert!(on_login.renders_at("/login"));

    // After login the router moves to /admin before the guard re-runs.
    assert!(!on_login.renders_at("/admin"));

    let regular = SessionView::signed_in(Some(Role::Regular));
    let on_admin = evaluate_gate("/admin", regular);
    assert!(!on_admin.renders_at("/admin"));
    assert_eq!(on_admin.status_at("/admin").redirect_target(), Some("/"));
}

#[test]
fn admin_gate_opens_after_reevaluation() {
    let admin = SessionView::signed_in(Some(Role::Admin));
    let gate = evaluate_gate("/admin", admin);
    assert!(gate.renders_at("/admin"));
    assert!(!gate.renders_at("/admin/settings"));
    assert!(evaluate_gate("/admin/settings", admin).renders_at("/admin/settings"));
}

#[test]
fn store_login_persists_and_reloads() {
    let store = CredentialStore::new(MemoryStorage::new());
    let state = store_login(&store, &outcome(Role::Admin), true).unwrap();
    assert!(!state.loading);
    assert_eq!(state.session.token.as_deref(), Some("jwt"));
    assert!(state.view().is_admin());
    assert!(store.remember_me());
}

#[test]
fn clear_credentials_empties_store() {
    let store = CredentialStore::new(MemoryStorage::new());
    store_login(&store, &outcome(Role::Regular), false).unwrap();
    clear_credentials(&store);
    assert_eq!(store.load(), access::StoredSession::default());
    assert!(!store.remember_me());
}
