//! Typed DTOs for the REST backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend JSON (including its `Fullname` and
//! `Description` capitalization). Numeric fields tolerate numbers encoded as
//! strings and prices tolerate numbers, since different endpoints disagree.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

pub use access::ProfileSnapshot;

/// One page of a listing, after shape normalization.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total rows across all pages.
    pub total: u64,
    /// Number of pages; zero when there are no rows.
    pub total_pages: u32,
    /// 1-based page these items belong to.
    pub page: u32,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self { items: Vec::new(), total: 0, total_pages: 0, page: 1 }
    }
}

/// Successful login: the bearer token plus the derived profile snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginOutcome {
    pub token: String,
    pub profile: ProfileSnapshot,
}

/// Credentials posted to `/accounts/login/`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Headline numbers for the dashboard cards.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DashboardStats {
    pub total_users: f64,
    pub subscribers: f64,
    pub total_earnings: f64,
}

/// One month of revenue for the earnings overview.
#[derive(Clone, Debug, PartialEq)]
pub struct EarningsPoint {
    pub month: String,
    pub revenue: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EarningsOverview {
    pub points: Vec<EarningsPoint>,
    pub growth_percentage: f64,
}

/// Account row in user management.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedUser {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    #[serde(rename = "Fullname", default)]
    pub fullname: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub date_joined: String,
    /// `None` when the backend omits the flag; treated as active.
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl ManagedUser {
    #[must_use]
    pub fn active(&self) -> bool {
        self.is_active.unwrap_or(true)
    }
}

/// A feature bullet attached to a subscription plan.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanFeature {
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "Description", default)]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_string_from_scalar")]
    pub price: String,
    #[serde(default)]
    pub billing_cycle: String,
    #[serde(default)]
    pub features: Vec<PlanFeature>,
}

/// Body for creating or editing a plan.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PlanDraft {
    pub title: String,
    pub price: String,
    pub billing_cycle: String,
    #[serde(rename = "Description")]
    pub description: String,
}

impl From<&SubscriptionPlan> for PlanDraft {
    fn from(plan: &SubscriptionPlan) -> Self {
        Self {
            title: plan.title.clone(),
            price: plan.price.clone(),
            billing_cycle: plan.billing_cycle.clone(),
            description: plan.description.clone(),
        }
    }
}

/// The account attached to a payment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentUser {
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "Fullname", default)]
    pub fullname: Option<String>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub is_active: bool,
}

/// A subscription payment; each one is a subscriber row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    #[serde(default)]
    pub user: PaymentUser,
    #[serde(default)]
    pub subscription: Option<SubscriptionPlan>,
    #[serde(default, deserialize_with = "deserialize_string_from_scalar")]
    pub amount: String,
    #[serde(default)]
    pub transaction_id: String,
    #[serde(default)]
    pub invoice_id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub payment_date: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Body for creating or replacing a FAQ.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FaqDraft {
    pub question: String,
    pub answer: String,
    pub is_published: bool,
}

impl Default for FaqDraft {
    fn default() -> Self {
        Self { question: String::new(), answer: String::new(), is_published: true }
    }
}

impl From<&Faq> for FaqDraft {
    fn from(faq: &Faq) -> Self {
        Self { question: faq.question.clone(), answer: faq.answer.clone(), is_published: faq.is_published }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub created: String,
    /// Star glyphs, e.g. `"⭐⭐⭐"`.
    #[serde(default, deserialize_with = "deserialize_string_from_scalar")]
    pub rating: String,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub reviewer: i64,
    #[serde(default)]
    pub reviewer_name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_string_from_scalar")]
    pub old_price: String,
    #[serde(default, deserialize_with = "deserialize_string_from_scalar")]
    pub new_price: String,
    #[serde(default)]
    pub billing_cycle: String,
    #[serde(default)]
    pub add_link: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub dynamic_discount_percentage: Option<f64>,
}

/// Body for creating or replacing a product.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub old_price: String,
    pub new_price: String,
    pub billing_cycle: String,
    pub add_link: String,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            old_price: String::new(),
            new_price: String::new(),
            billing_cycle: "monthly".to_owned(),
            add_link: String::new(),
        }
    }
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            description: product.description.clone(),
            old_price: product.old_price.clone(),
            new_price: product.new_price.clone(),
            billing_cycle: product.billing_cycle.clone(),
            add_link: product.add_link.clone(),
        }
    }
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        serde_json::Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("expected integer string, got {s:?}"))),
        _ => Err(D::Error::custom("expected number")),
    }
}

fn deserialize_string_from_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(D::Error::custom(format!("expected string or number, got {other}"))),
    }
}
