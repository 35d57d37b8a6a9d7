//! REST error taxonomy shared by the API client and pages.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// 401/403; the stored credential must be dropped.
    #[error("session expired or not authorized ({0})")]
    Unauthorized(u16),
    /// Any other non-success status.
    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },
    /// A 2xx body that reports failure (`success: false` or `error`).
    #[error("{0}")]
    Rejected(String),
    /// A body that does not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// REST calls only run in the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Whether the error should invalidate the stored credential.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    /// Short text for inline display.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(message) | Self::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Map an HTTP status plus parsed body into `Ok` or the matching error.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] for 401/403 and [`ApiError::Status`]
/// for every other status outside `200..300`.
pub fn check_status(status: u16, body: &Value) -> Result<(), ApiError> {
    match status {
        200..=299 => Ok(()),
        401 | 403 => Err(ApiError::Unauthorized(status)),
        _ => Err(ApiError::Status {
            status,
            message: body_message(body).unwrap_or_else(|| format!("HTTP {status}")),
        }),
    }
}

/// First human-readable message in a body: `detail`, `message`, then `error`.
#[must_use]
pub fn body_message(body: &Value) -> Option<String> {
    ["detail", "message", "error"]
        .iter()
        .filter_map(|key| body.get(key).and_then(Value::as_str))
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_owned)
}
