//! Shared auth helpers for the route guard, login and logout flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard, the login page, the settings logout button and the API
//! client's 401/403 handling all change the session. They go through these
//! helpers so storage, the mirrored cookie and `AuthState` stay in step.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use access::{CredentialStore, Decision, KeyValueStorage, RouteGate, RouteTable, SessionView, StorageError, authorize};

use crate::net::types::LoginOutcome;
use crate::state::auth::AuthState;

/// Full policy decision for `path` against the default route table.
#[must_use]
pub fn guard_decision(path: &str, session: SessionView) -> Decision {
    authorize(&RouteTable::default(), path, session)
}

/// Guard state for `path`, pinned to that path.
#[must_use]
pub fn evaluate_gate(path: &str, session: SessionView) -> RouteGate {
    RouteGate::evaluated(path, guard_decision(path, session))
}

/// Persist a successful login and return the state to publish.
///
/// # Errors
///
/// Returns a [`StorageError`] when the credential cannot be written; the
/// caller must not treat the user as signed in.
pub fn store_login<S: KeyValueStorage>(
    store: &CredentialStore<S>,
    outcome: &LoginOutcome,
    remember_me: bool,
) -> Result<AuthState, StorageError> {
    store.save(&outcome.token, &outcome.profile, remember_me)?;
    Ok(AuthState::loaded(store.load()))
}

/// Drop every stored credential key. Failures are logged, not returned,
/// since the user is leaving either way.
pub fn clear_credentials<S: KeyValueStorage>(store: &CredentialStore<S>) {
    if let Err(err) = store.clear() {
        log::debug!("clearing credentials failed: {err}");
    }
}

/// End the session after the backend rejected the credential: clear
/// storage, expire the mirrored cookie and hard-navigate to `/login`.
pub fn invalidate_session() {
    log::warn!("credential rejected by backend; signing out");
    sign_out();
}

/// User-initiated logout.
pub fn logout() {
    log::debug!("logout requested");
    sign_out();
}

fn sign_out() {
    clear_credentials(&super::credentials::browser_store());
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async {
        if let Err(err) = crate::net::api::clear_session_cookie().await {
            log::debug!("expiring session cookie failed: {err}");
        }
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(access::route::LOGIN_PATH);
        }
    });
}
