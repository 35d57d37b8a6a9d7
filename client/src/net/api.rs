//! Typed REST client for the dashboard backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each carrying the
//! stored bearer token.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since the
//! backend is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every endpoint returns `Result<_, ApiError>`. A 401/403 on an authorized
//! call invalidates the stored credential and sends the browser to `/login`
//! before the error reaches the page, so pages only render the message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

pub use super::error::ApiError;
use super::normalize::{detail_message, find_number, normalize_list, normalize_object, normalize_page};
#[cfg(feature = "hydrate")]
use super::normalize::{login_failed_message, parse_login_response};
use super::types::{
    DashboardStats, EarningsOverview, Faq, FaqDraft, LoginOutcome, ManagedUser, Page, Payment, PlanDraft, Product,
    ProductDraft, Review, SubscriptionPlan,
};

/// Backend origin, fixed at build time.
pub const API_BASE_URL: &str = match option_env!("DASHBOARD_API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

const SUBSCRIPTIONS_PATH: &str = "/payment/subscriptions";
const FAQ_PATH: &str = "/service/faq/";
const REVIEW_PATH: &str = "/service/review/";
const PRODUCT_PATH: &str = "/product/api/Product-all/";
const PAYMENTS_PATH: &str = "/payment/payments/";
/// Same-origin cookie mirror served by the dashboard server.
const SESSION_PATH: &str = "/session";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// Absolute URL for a backend path.
#[must_use]
pub fn endpoint_url(path: &str) -> String {
    format!("{}{path}", API_BASE_URL.trim_end_matches('/'))
}

#[must_use]
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// User listing path; a blank search term is omitted.
#[must_use]
pub fn users_endpoint(page: u32, page_size: u32, search: &str) -> String {
    let mut path = format!("/accounts/user_all/?page={page}&page_size={page_size}");
    let search = search.trim();
    if !search.is_empty() {
        path.push_str("&search=");
        path.push_str(&urlencoding::encode(search));
    }
    path
}

fn paged_endpoint(base: &str, page: u32, page_size: u32) -> String {
    format!("{base}?page={page}&page_size={page_size}")
}

fn item_endpoint(base: &str, id: i64) -> String {
    format!("{}/{id}/", base.trim_end_matches('/'))
}

/// Parse a response body: empty -> `Null`, non-JSON -> the raw text.
#[cfg(any(test, feature = "hydrate"))]
fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_owned()))
}

/// Send one request and check its status.
async fn send(method: HttpMethod, url: &str, body: Option<&Value>, token: Option<&str>) -> Result<Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let mut builder = match method {
            HttpMethod::Get => Request::get(url),
            HttpMethod::Post => Request::post(url),
            HttpMethod::Put => Request::put(url),
            HttpMethod::Patch => Request::patch(url),
            HttpMethod::Delete => Request::delete(url),
        }
        .header("Accept", "application/json");
        if let Some(token) = token {
            builder = builder.header("Authorization", &bearer_header(token));
        }
        let sent = match body {
            Some(body) => builder.json(body).map_err(|e| ApiError::Network(e.to_string()))?.send().await,
            None => builder.send().await,
        };
        let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let value = parse_body(&resp.text().await.unwrap_or_default());
        super::error::check_status(status, &value)?;
        Ok(value)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, url, body, token);
        Err(ApiError::Unavailable)
    }
}

/// Authorized backend call. Unauthorized responses end the session.
async fn request(method: HttpMethod, path: &str, body: Option<&Value>) -> Result<Value, ApiError> {
    let token = crate::util::credentials::browser_store().token();
    let result = send(method, &endpoint_url(path), body, token.as_deref()).await;
    if let Err(err) = &result {
        if err.is_unauthorized() {
            crate::util::auth::invalidate_session();
        } else {
            log::warn!("{method:?} {path} failed: {err}");
        }
    }
    result
}

fn to_body<T: serde::Serialize>(value: &T) -> Result<Value, ApiError> {
    Ok(serde_json::to_value(value)?)
}

// =============================================================
// Session
// =============================================================

/// Exchange credentials for a token and profile snapshot.
///
/// # Errors
///
/// [`ApiError::Rejected`] with the server's message (or a generic one) when
/// the credentials are refused; transport errors otherwise.
pub async fn login(email: &str, password: &str) -> Result<LoginOutcome, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = to_body(&super::types::LoginRequest { email, password })?;
        let value = match send(HttpMethod::Post, &endpoint_url("/accounts/login/"), Some(&body), None).await {
            Ok(value) => value,
            Err(ApiError::Unauthorized(_)) => return Err(ApiError::Rejected(login_failed_message().to_owned())),
            Err(ApiError::Status { message, .. }) => return Err(ApiError::Rejected(message)),
            Err(err) => return Err(err),
        };
        parse_login_response(&value)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Unavailable)
    }
}

/// Ask the dashboard server to mirror the token into the `authToken` cookie.
///
/// # Errors
///
/// Transport or status errors from `POST /session`.
pub async fn mirror_session_cookie(token: &str) -> Result<(), ApiError> {
    let body = serde_json::json!({ "token": token });
    send(HttpMethod::Post, SESSION_PATH, Some(&body), None).await.map(|_| ())
}

/// Expire the `authToken` cookie.
///
/// # Errors
///
/// Transport or status errors from `DELETE /session`.
pub async fn clear_session_cookie() -> Result<(), ApiError> {
    send(HttpMethod::Delete, SESSION_PATH, None, None).await.map(|_| ())
}

// =============================================================
// Dashboard
// =============================================================

/// Headline numbers. Each figure is fetched independently; a failed figure
/// reads as zero unless the session itself was rejected.
///
/// # Errors
///
/// [`ApiError::Unauthorized`] if any call was refused.
pub async fn dashboard_stats() -> Result<DashboardStats, ApiError> {
    let users = request(HttpMethod::Get, "/accounts/users/count/", None).await;
    let earnings = request(HttpMethod::Get, "/payment/payments/total-earnings/", None).await;
    let payments = request(HttpMethod::Get, PAYMENTS_PATH, None).await;

    for result in [&users, &earnings, &payments] {
        if let Err(err) = result
            && err.is_unauthorized()
        {
            return Err(err.clone());
        }
    }
    if let (Err(err), Err(_), Err(_)) = (&users, &earnings, &payments) {
        return Err(err.clone());
    }

    Ok(DashboardStats {
        total_users: users.ok().and_then(|v| find_number(&v, &["total_users"])).unwrap_or(0.0),
        total_earnings: earnings.ok().and_then(|v| find_number(&v, &["total"])).unwrap_or(0.0),
        subscribers: payments.ok().map_or(0.0, |v| subscriber_count(&v)),
    })
}

/// Subscriber count from a payments body: `count`/`total`, else list length.
#[allow(clippy::cast_precision_loss)]
fn subscriber_count(value: &Value) -> f64 {
    find_number(value, &["count", "total"])
        .unwrap_or_else(|| normalize_list::<Value>(value.clone()).map_or(0.0, |items| items.len() as f64))
}

/// Monthly earnings series.
///
/// # Errors
///
/// Transport or status errors.
pub async fn earnings_overview() -> Result<EarningsOverview, ApiError> {
    let value = request(HttpMethod::Get, "/payment/payments/earnings-overview/", None).await?;
    Ok(super::normalize::parse_earnings_overview(&value))
}

// =============================================================
// Users
// =============================================================

/// One page of accounts, optionally filtered by `search`.
///
/// # Errors
///
/// Transport, status or decode errors.
pub async fn list_users(page: u32, page_size: u32, search: &str) -> Result<Page<ManagedUser>, ApiError> {
    let value = request(HttpMethod::Get, &users_endpoint(page, page_size, search), None).await?;
    normalize_page(value, page, page_size)
}

/// Block an account; returns the server's confirmation text.
///
/// # Errors
///
/// Transport or status errors.
pub async fn block_user(id: i64) -> Result<String, ApiError> {
    let value = request(HttpMethod::Post, &format!("/accounts/BlockUser/{id}/"), None).await?;
    Ok(detail_message(&value, "User blocked"))
}

/// Unblock an account; returns the server's confirmation text.
///
/// # Errors
///
/// Transport or status errors.
pub async fn unblock_user(id: i64) -> Result<String, ApiError> {
    let value = request(HttpMethod::Post, &format!("/accounts/BlockUser/{id}/unblock/"), None).await?;
    Ok(detail_message(&value, "User unblocked"))
}

/// Delete an account.
///
/// # Errors
///
/// Transport or status errors.
pub async fn remove_user(id: i64) -> Result<(), ApiError> {
    request(HttpMethod::Delete, &item_endpoint("/accounts/user_all", id), None).await.map(|_| ())
}

// =============================================================
// Subscription plans and payments
// =============================================================

/// # Errors
///
/// Transport, status, rejection or decode errors.
pub async fn list_plans() -> Result<Vec<SubscriptionPlan>, ApiError> {
    normalize_list(request(HttpMethod::Get, SUBSCRIPTIONS_PATH, None).await?)
}

/// # Errors
///
/// Transport, status or rejection errors.
pub async fn create_plan(draft: &PlanDraft) -> Result<(), ApiError> {
    let body = to_body(draft)?;
    let value = request(HttpMethod::Post, &format!("{SUBSCRIPTIONS_PATH}/"), Some(&body)).await?;
    super::normalize::check_rejection(&value)
}

/// # Errors
///
/// Transport, status or rejection errors.
pub async fn update_plan(id: i64, draft: &PlanDraft) -> Result<(), ApiError> {
    let body = to_body(draft)?;
    let value = request(HttpMethod::Put, &item_endpoint(SUBSCRIPTIONS_PATH, id), Some(&body)).await?;
    super::normalize::check_rejection(&value)
}

/// # Errors
///
/// Transport or status errors.
pub async fn delete_plan(id: i64) -> Result<(), ApiError> {
    request(HttpMethod::Delete, &item_endpoint(SUBSCRIPTIONS_PATH, id), None).await.map(|_| ())
}

/// Every payment; each one is a subscriber row.
///
/// # Errors
///
/// Transport, status or decode errors.
pub async fn list_payments() -> Result<Vec<Payment>, ApiError> {
    normalize_list(request(HttpMethod::Get, PAYMENTS_PATH, None).await?)
}

// =============================================================
// FAQ
// =============================================================

/// # Errors
///
/// Transport, status or decode errors.
pub async fn list_faqs(page: u32, page_size: u32) -> Result<Page<Faq>, ApiError> {
    let value = request(HttpMethod::Get, &paged_endpoint(FAQ_PATH, page, page_size), None).await?;
    normalize_page(value, page, page_size)
}

/// # Errors
///
/// Transport, status or decode errors.
pub async fn create_faq(draft: &FaqDraft) -> Result<Faq, ApiError> {
    let body = to_body(draft)?;
    normalize_object(request(HttpMethod::Post, FAQ_PATH, Some(&body)).await?)
}

/// # Errors
///
/// Transport, status or decode errors.
pub async fn update_faq(id: i64, draft: &FaqDraft) -> Result<Faq, ApiError> {
    let body = to_body(draft)?;
    normalize_object(request(HttpMethod::Put, &item_endpoint(FAQ_PATH, id), Some(&body)).await?)
}

/// Flip only the publish flag.
///
/// # Errors
///
/// Transport or status errors.
pub async fn set_faq_published(id: i64, is_published: bool) -> Result<(), ApiError> {
    let body = serde_json::json!({ "is_published": is_published });
    request(HttpMethod::Patch, &item_endpoint(FAQ_PATH, id), Some(&body)).await.map(|_| ())
}

/// # Errors
///
/// Transport or status errors.
pub async fn delete_faq(id: i64) -> Result<(), ApiError> {
    request(HttpMethod::Delete, &item_endpoint(FAQ_PATH, id), None).await.map(|_| ())
}

// =============================================================
// Reviews
// =============================================================

/// # Errors
///
/// Transport, status or decode errors.
pub async fn list_reviews(page: u32, page_size: u32) -> Result<Page<Review>, ApiError> {
    let value = request(HttpMethod::Get, &paged_endpoint(REVIEW_PATH, page, page_size), None).await?;
    normalize_page(value, page, page_size)
}

/// # Errors
///
/// Transport or status errors.
pub async fn delete_review(id: i64) -> Result<(), ApiError> {
    request(HttpMethod::Delete, &item_endpoint(REVIEW_PATH, id), None).await.map(|_| ())
}

// =============================================================
// Products
// =============================================================

/// # Errors
///
/// Transport, status, rejection or decode errors.
pub async fn list_products() -> Result<Vec<Product>, ApiError> {
    normalize_list(request(HttpMethod::Get, PRODUCT_PATH, None).await?)
}

/// # Errors
///
/// Transport, status or rejection errors.
pub async fn create_product(draft: &ProductDraft) -> Result<(), ApiError> {
    let body = to_body(draft)?;
    let value = request(HttpMethod::Post, PRODUCT_PATH, Some(&body)).await?;
    super::normalize::check_rejection(&value)
}

/// # Errors
///
/// Transport, status or rejection errors.
pub async fn update_product(id: i64, draft: &ProductDraft) -> Result<(), ApiError> {
    let body = to_body(draft)?;
    let value = request(HttpMethod::Put, &item_endpoint(PRODUCT_PATH, id), Some(&body)).await?;
    super::normalize::check_rejection(&value)
}

/// # Errors
///
/// Transport or status errors.
pub async fn delete_product(id: i64) -> Result<(), ApiError> {
    request(HttpMethod::Delete, &item_endpoint(PRODUCT_PATH, id), None).await.map(|_| ())
}
