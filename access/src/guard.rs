//! Route guard state machine.
//!
//! `Checking` is initial. The first [`GuardStatus::resolve`] moves to a
//! terminal state; later calls are ignored. A [`RouteGate`] pins that state
//! to the path it was computed for, so a navigation reads as `Checking` until
//! the new path has been evaluated.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::policy::Decision;
use crate::route::normalize_path;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardStatus {
    /// Policy not yet evaluated; render only a placeholder.
    #[default]
    Checking,
    /// Policy allowed the route; render the wrapped content.
    Authenticated,
    /// Policy denied the route; a navigation to the target is in flight.
    Redirecting(Decision),
}

impl GuardStatus {
    /// Apply a policy decision. Only effective while `Checking`.
    #[must_use]
    pub fn resolve(self, decision: Decision) -> Self {
        match self {
            Self::Checking if decision.is_allow() => Self::Authenticated,
            Self::Checking => Self::Redirecting(decision),
            terminal => terminal,
        }
    }

    /// Whether protected content may be rendered.
    #[must_use]
    pub fn renders_content(self) -> bool {
        matches!(self, Self::Authenticated)
    }

    /// Where to navigate, if this state is a redirect.
    #[must_use]
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            Self::Redirecting(decision) => decision.target(),
            _ => None,
        }
    }
}

/// Guard status together with the path it was evaluated for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteGate {
    path: Option<String>,
    status: GuardStatus,
}

impl RouteGate {
    /// Record the decision taken for `path`.
    #[must_use]
    pub fn evaluated(path: &str, decision: Decision) -> Self {
        Self { path: Some(normalize_path(path).to_owned()), status: GuardStatus::Checking.resolve(decision) }
    }

    /// Status as seen from `current`. Any other path than the evaluated one
    /// is still `Checking`.
    #[must_use]
    pub fn status_at(&self, current: &str) -> GuardStatus {
        match &self.path {
            Some(path) if path == normalize_path(current) => self.status,
            _ => GuardStatus::Checking,
        }
    }

    /// Whether protected content may render at `current`.
    #[must_use]
    pub fn renders_at(&self, current: &str) -> bool {
        self.status_at(current).renders_content()
    }
}
