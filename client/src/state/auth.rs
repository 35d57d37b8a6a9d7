//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<AuthState>` context by `App`. Filled from the
//! credential store on the client after hydration; pages read the profile
//! snapshot from here instead of touching storage.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use access::{ProfileSnapshot, SessionView, StoredSession};

/// Stored credential plus loading status.
///
/// `loading` stays true until the browser store has been read once, which
/// never happens during SSR.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: StoredSession,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: StoredSession::default(), loading: true }
    }
}

impl AuthState {
    /// State after reading storage.
    #[must_use]
    pub fn loaded(session: StoredSession) -> Self {
        Self { session, loading: false }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.token.is_some()
    }

    #[must_use]
    pub fn profile(&self) -> Option<&ProfileSnapshot> {
        self.session.profile.as_ref()
    }

    #[must_use]
    pub fn view(&self) -> SessionView {
        self.session.view()
    }

    /// Name for the header and settings page.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.profile().map_or_else(|| "Admin".to_owned(), ProfileSnapshot::display_name)
    }

    #[must_use]
    pub fn email(&self) -> String {
        self.profile().map(|p| p.email.clone()).unwrap_or_default()
    }
}
