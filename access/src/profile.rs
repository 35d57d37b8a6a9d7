//! Stored user profile snapshot and the canonical role claim.
//!
//! DESIGN
//! ======
//! The backend's user object has carried several admin indicators over time
//! (`role`, `is_admin`, `is_staff`, `is_superuser`). They are folded into a
//! single [`Role`] exactly once, when the login response is turned into a
//! [`ProfileSnapshot`]. Guards only ever read the typed `role` field back.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Canonical role used by the authorization policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Dashboard operator with access to `/admin`.
    Admin,
    /// Any other authenticated account.
    #[default]
    Regular,
}

impl Role {
    #[must_use]
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// Display and role fields persisted alongside the session credential.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    /// Backend user identifier, if the login response carried one.
    #[serde(default)]
    pub id: Option<i64>,
    /// Account e-mail.
    #[serde(default)]
    pub email: String,
    /// Display name, if known.
    #[serde(default)]
    pub name: Option<String>,
    /// Canonical role claim.
    pub role: Role,
}

impl ProfileSnapshot {
    /// Build a snapshot from the backend's login `user` object.
    ///
    /// Admin when any of `role == "admin"`, `is_admin`, `is_staff` or
    /// `is_superuser` is true. Non-object input yields a regular profile with
    /// empty display fields.
    #[must_use]
    pub fn from_login_user(user: &Value) -> Self {
        let flag = |key: &str| user.get(key).and_then(Value::as_bool).unwrap_or(false);
        let role_claim = user
            .get("role")
            .and_then(Value::as_str)
            .is_some_and(|r| r.eq_ignore_ascii_case("admin"));
        let role = if role_claim || flag("is_admin") || flag("is_staff") || flag("is_superuser") {
            Role::Admin
        } else {
            Role::Regular
        };

        let text = |key: &str| {
            user.get(key)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
        };
        let name = text("Fullname").or_else(|| text("full_name")).or_else(|| {
            let joined = [text("first_name"), text("last_name")]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" ");
            (!joined.is_empty()).then_some(joined)
        });

        Self { id: user.get("id").and_then(Value::as_i64), email: text("email").unwrap_or_default(), name, role }
    }

    /// Name to show in the header: display name, else e-mail local part.
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            return name.to_owned();
        }
        match self.email.split('@').next() {
            Some(local) if !local.is_empty() => local.to_owned(),
            _ => "Unknown User".to_owned(),
        }
    }
}
