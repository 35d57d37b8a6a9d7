//! Authorization decisions for both enforcement points.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`authorize`] is the full, role-aware policy evaluated by the client route
//! guard. [`edge_decision`] is the coarse cookie-only variant evaluated by the
//! server middleware before any page code runs. Both are pure.

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

use crate::profile::Role;
use crate::route::{ADMIN_PATH, HOME_PATH, LOGIN_PATH, RouteClass, RouteTable, normalize_path};

/// Outcome of evaluating the policy for one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Decision {
    Allow,
    RedirectToLogin,
    RedirectToHome,
    RedirectToAdmin,
}

impl Decision {
    /// Navigation target for redirects; `None` for [`Decision::Allow`].
    #[must_use]
    pub fn target(self) -> Option<&'static str> {
        match self {
            Self::Allow => None,
            Self::RedirectToLogin => Some(LOGIN_PATH),
            Self::RedirectToHome => Some(HOME_PATH),
            Self::RedirectToAdmin => Some(ADMIN_PATH),
        }
    }

    #[must_use]
    pub fn is_allow(self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Collapse a redirect that would land on `path` itself into `Allow`.
    fn settle(self, path: &str) -> Self {
        match self.target() {
            Some(target) if target == normalize_path(path) => Self::Allow,
            _ => self,
        }
    }
}

/// What the guard knows about the current session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionView {
    /// A non-empty credential is present.
    pub has_credential: bool,
    /// Role from the stored snapshot; `None` when absent or unreadable.
    pub role: Option<Role>,
}

impl SessionView {
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn signed_in(role: Option<Role>) -> Self {
        Self { has_credential: true, role }
    }

    #[must_use]
    pub fn is_admin(self) -> bool {
        self.role.is_some_and(Role::is_admin)
    }
}

/// Decide for a route class alone, without the self-redirect check.
#[must_use]
pub fn decide(class: RouteClass, session: SessionView) -> Decision {
    match (class, session.has_credential) {
        (RouteClass::Public, false) => Decision::Allow,
        (RouteClass::Public, true) if session.is_admin() => Decision::RedirectToAdmin,
        (RouteClass::Public, true) => Decision::RedirectToHome,
        (RouteClass::Protected | RouteClass::AdminOnly, false) => Decision::RedirectToLogin,
        (RouteClass::AdminOnly, true) if session.is_admin() => Decision::Allow,
        (RouteClass::AdminOnly, true) => Decision::RedirectToHome,
        (RouteClass::Protected, true) => Decision::Allow,
    }
}

/// Full policy for `path`, as evaluated by the client route guard.
///
/// A redirect whose target is the current path is returned as `Allow`, so a
/// signed-in regular user can stay on `/` instead of looping.
#[must_use]
pub fn authorize(table: &RouteTable, path: &str, session: SessionView) -> Decision {
    decide(table.classify(path), session).settle(path)
}

/// Coarse cookie-only decision made at the edge.
///
/// The bare root redirects to the admin area when a cookie is present.
/// Otherwise only credential presence is checked; roles are left to the
/// client guard, which has the richer profile.
#[must_use]
pub fn edge_decision(table: &RouteTable, path: &str, has_cookie: bool) -> Decision {
    if normalize_path(path) == HOME_PATH {
        return if has_cookie { Decision::RedirectToAdmin } else { Decision::Allow };
    }
    if table.classify(path).requires_credential() && !has_cookie {
        return Decision::RedirectToLogin;
    }
    Decision::Allow
}
