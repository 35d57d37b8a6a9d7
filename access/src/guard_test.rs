use super::*;

#[test]
fn starts_checking_without_content() {
    let status = GuardStatus::default();
    assert_eq!(status, GuardStatus::Checking);
    assert!(!status.renders_content());
    assert_eq!(status.redirect_target(), None);
}

#[test]
fn allow_resolves_to_authenticated() {
    let status = GuardStatus::Checking.resolve(Decision::Allow);
    assert_eq!(status, GuardStatus::Authenticated);
    assert!(status.renders_content());
}

#[test]
fn redirect_resolves_to_redirecting_with_target() {
    let status = GuardStatus::Checking.resolve(Decision::RedirectToLogin);
    assert_eq!(status, GuardStatus::Redirecting(Decision::RedirectToLogin));
    assert!(!status.renders_content());
    assert_eq!(status.redirect_target(), Some("/login"));
}

#[test]
fn terminal_states_ignore_later_decisions() {
    let authed = GuardStatus::Authenticated.resolve(Decision::RedirectToLogin);
    assert_eq!(authed, GuardStatus::Authenticated);

    let redirecting = GuardStatus::Redirecting(Decision::RedirectToHome).resolve(Decision::Allow);
    assert_eq!(redirecting, GuardStatus::Redirecting(Decision::RedirectToHome));
}

// =============================================================================
// RouteGate
// =============================================================================

#[test]
fn unevaluated_gate_renders_nothing() {
    let gate = RouteGate::default();
    assert_eq!(gate.status_at("/"), GuardStatus::Checking);
    assert!(!gate.renders_at("/login"));
}

#[test]
fn gate_opens_only_for_the_evaluated_path() {
    let gate = RouteGate::evaluated("/login", Decision::Allow);
    assert!(gate.renders_at("/login"));
    assert!(gate.renders_at("/login/"));
    assert!(gate.renders_at("/login?next=/admin"));
    assert_eq!(gate.status_at("/admin"), GuardStatus::Checking);
    assert!(!gate.renders_at("/admin"));
}

#[test]
fn navigation_closes_gate_until_reevaluated() {
    // Allowed on the login page, then a regular user is sent to /admin.
    let gate = RouteGate::evaluated("/login", Decision::Allow);
    assert!(!gate.renders_at("/admin"));

    let gate = RouteGate::evaluated("/admin", Decision::RedirectToHome);
    assert!(!gate.renders_at("/admin"));
    assert_eq!(gate.status_at("/admin").redirect_target(), Some("/"));
}
