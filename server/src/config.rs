//! Server configuration parsed from environment variables.
//!
//! Leptos site options are loaded separately by `routes::app` from
//! `[package.metadata.leptos]` / `LEPTOS_*` variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use thiserror::Error;
use time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SESSION_COOKIE_MAX_AGE_DAYS: i64 = 30;
/// Browsers cap cookie lifetimes at 400 days.
pub const MAX_SESSION_COOKIE_MAX_AGE_DAYS: i64 = 400;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid TCP port.
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),

    /// `SESSION_COOKIE_MAX_AGE_DAYS` is not a whole number of days in `1..=400`.
    #[error("invalid SESSION_COOKIE_MAX_AGE_DAYS: {0:?}")]
    InvalidMaxAge(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Sets the `Secure` attribute on the session cookie.
    pub cookie_secure: bool,
    pub session_cookie_max_age_days: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            cookie_secure: false,
            session_cookie_max_age_days: DEFAULT_SESSION_COOKIE_MAX_AGE_DAYS,
        }
    }
}

impl Config {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `COOKIE_SECURE`: boolean, default false
    /// - `SESSION_COOKIE_MAX_AGE_DAYS`: default 30, at most 400
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let cookie_secure = lookup("COOKIE_SECURE").as_deref().and_then(parse_bool).unwrap_or(false);
        let session_cookie_max_age_days = match lookup("SESSION_COOKIE_MAX_AGE_DAYS") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|days| (1..=MAX_SESSION_COOKIE_MAX_AGE_DAYS).contains(days))
                .ok_or(ConfigError::InvalidMaxAge(raw))?,
            None => DEFAULT_SESSION_COOKIE_MAX_AGE_DAYS,
        };

        Ok(Self { port, cookie_secure, session_cookie_max_age_days })
    }

    /// Session cookie lifetime, clamped to `0..=400` days.
    #[must_use]
    pub fn session_cookie_max_age(&self) -> Duration {
        Duration::days(self.session_cookie_max_age_days.clamp(0, MAX_SESSION_COOKIE_MAX_AGE_DAYS))
    }
}

/// `1`/`true`/`yes`/`on` and `0`/`false`/`no`/`off`, case-insensitive.
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
