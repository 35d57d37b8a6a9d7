//! Response-shape normalization for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Endpoints disagree on envelopes: `{results, total, total_pages, page}`,
//! `{count, next, previous, results}`, `{data: {...}}`, `{success, message,
//! data}` and bare arrays all occur. Pages never inspect raw JSON; every
//! shape check lives here and yields the typed values in `types`.

#[cfg(test)]
#[path = "normalize_test.rs"]
mod normalize_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;
use super::types::{EarningsOverview, EarningsPoint, LoginOutcome, Page, ProfileSnapshot};

const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";

/// Coerce a JSON scalar to `f64`: numbers as-is, numeric strings parsed,
/// everything else (including `null`) as `0`.
#[must_use]
pub fn number_value(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()).unwrap_or(0.0),
        _ => 0.0,
    }
}

/// First present value among `keys`, at the top level and then under `data`.
fn lookup<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    let top = keys.iter().find_map(|k| value.get(*k).filter(|v| !v.is_null()));
    top.or_else(|| {
        let data = value.get("data")?;
        keys.iter().find_map(|k| data.get(*k).filter(|v| !v.is_null()))
    })
}

/// First numeric-compatible value among `keys` (see [`lookup`]).
#[must_use]
pub fn find_number(value: &Value, keys: &[&str]) -> Option<f64> {
    lookup(value, keys).map(number_value)
}

/// Reject 2xx bodies that report failure in-band.
///
/// # Errors
///
/// [`ApiError::Rejected`] for `success: false` or a non-empty `error` string.
pub fn check_rejection(value: &Value) -> Result<(), ApiError> {
    if value.get("success").and_then(Value::as_bool) == Some(false) {
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or("request failed");
        return Err(ApiError::Rejected(message.to_owned()));
    }
    if let Some(error) = value.get("error").and_then(Value::as_str).filter(|e| !e.trim().is_empty()) {
        return Err(ApiError::Rejected(error.to_owned()));
    }
    Ok(())
}

/// Locate the item array in any known envelope.
fn items_of(value: &Value) -> Option<&Vec<Value>> {
    if let Value::Array(items) = value {
        return Some(items);
    }
    value
        .get("results")
        .and_then(Value::as_array)
        .or_else(|| value.get("data").and_then(|d| d.get("results")).and_then(Value::as_array))
        .or_else(|| value.get("data").and_then(Value::as_array))
}

/// Decode a list from any known envelope.
///
/// # Errors
///
/// [`ApiError::Rejected`] for in-band failures, [`ApiError::Decode`] when no
/// item array exists or an item does not match `T`.
pub fn normalize_list<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, ApiError> {
    check_rejection(&value)?;
    let items = items_of(&value).ok_or_else(|| ApiError::Decode("missing item list".to_owned()))?;
    items
        .iter()
        .map(|item| serde_json::from_value(item.clone()).map_err(ApiError::from))
        .collect()
}

/// Decode one listing page from any known envelope.
///
/// Total falls back to the item count, total pages to
/// `ceil(total / page_size)`, and page to `requested_page`.
///
/// # Errors
///
/// Same as [`normalize_list`].
pub fn normalize_page<T: DeserializeOwned>(value: Value, requested_page: u32, page_size: u32) -> Result<Page<T>, ApiError> {
    let items: Vec<T> = normalize_list(value.clone())?;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total = find_number(&value, &["total", "count"]).map_or(items.len() as u64, |n| n.max(0.0) as u64);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total_pages = find_number(&value, &["total_pages"])
        .map(|n| n.max(0.0) as u32)
        .unwrap_or_else(|| crate::util::pagination::total_pages(total, page_size));

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let page = find_number(&value, &["page"])
        .map(|n| n as u32)
        .filter(|p| *p >= 1)
        .unwrap_or(requested_page.max(1));

    Ok(Page { items, total, total_pages, page })
}

/// Decode a single object, unwrapping a `{data: {...}}` envelope if present.
///
/// # Errors
///
/// [`ApiError::Rejected`] for in-band failures, [`ApiError::Decode`] when the
/// object does not match `T`.
pub fn normalize_object<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    check_rejection(&value)?;
    let inner = match value.get("data") {
        Some(data) if data.is_object() => data.clone(),
        _ => value,
    };
    Ok(serde_json::from_value(inner)?)
}

/// Success text for write endpoints: `detail`/`message`, else `fallback`.
#[must_use]
pub fn detail_message(value: &Value, fallback: &str) -> String {
    super::error::body_message(value).unwrap_or_else(|| fallback.to_owned())
}

/// Turn a login response into a token plus profile snapshot.
///
/// # Errors
///
/// [`ApiError::Rejected`] carrying the server's `message`/`error`, or a
/// generic message, when no access token is present.
pub fn parse_login_response(value: &Value) -> Result<LoginOutcome, ApiError> {
    let token = value.get("access").and_then(Value::as_str).map(str::trim).filter(|t| !t.is_empty());
    let Some(token) = token else {
        let message = ["message", "error"]
            .iter()
            .find_map(|k| value.get(*k).and_then(Value::as_str).filter(|m| !m.trim().is_empty()))
            .unwrap_or(LOGIN_FAILED);
        return Err(ApiError::Rejected(message.to_owned()));
    };
    let user = value.get("user").filter(|u| u.is_object()).cloned().unwrap_or(Value::Null);
    Ok(LoginOutcome { token: token.to_owned(), profile: ProfileSnapshot::from_login_user(&user) })
}

/// Message shown when the login endpoint answers 401/403.
#[must_use]
pub fn login_failed_message() -> &'static str {
    LOGIN_FAILED
}

/// Decode the monthly earnings series and growth percentage.
#[must_use]
pub fn parse_earnings_overview(value: &Value) -> EarningsOverview {
    let growth_percentage = find_number(value, &["growth_percentage"]).unwrap_or(0.0);
    let points = lookup(value, &["earnings"])
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|item| EarningsPoint {
                    month: item.get("month").and_then(Value::as_str).unwrap_or_default().to_owned(),
                    revenue: item.get("total").map_or(0.0, number_value),
                })
                .collect()
        })
        .unwrap_or_default();
    EarningsOverview { points, growth_percentage }
}
