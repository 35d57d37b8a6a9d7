//! Display formatting for dates, money and names.
//!
//! DESIGN
//! ======
//! Backend values arrive as loose strings (ISO timestamps, decimal prices).
//! Every helper accepts the raw value and degrades to something printable
//! instead of failing, since a bad cell must not break a table.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::net::types::PaymentUser;

/// Parse the date portion of an ISO-8601 timestamp or plain `YYYY-MM-DD`.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    raw.get(..10).and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
}

fn format_date_with(raw: &str, pattern: &str) -> String {
    if raw.trim().is_empty() {
        return "N/A".to_owned();
    }
    parse_date(raw).map_or_else(|| raw.to_owned(), |d| d.format(pattern).to_string())
}

/// `January 5, 2024`.
#[must_use]
pub fn format_date_long(raw: &str) -> String {
    format_date_with(raw, "%B %-d, %Y")
}

/// `Jan 5, 2024`.
#[must_use]
pub fn format_date_short(raw: &str) -> String {
    format_date_with(raw, "%b %-d, %Y")
}

/// Lenient price parse; unparseable input reads as zero.
#[must_use]
pub fn parse_price(raw: &str) -> f64 {
    raw.trim().parse::<f64>().ok().filter(|p| p.is_finite()).unwrap_or(0.0)
}

/// `$1,234.00`, with a leading minus for negatives.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let cents = format!("{:.2}", amount.abs());
    let (whole, frac) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));
    let sign = if amount < 0.0 && cents != "0.00" { "-" } else { "" };
    format!("{sign}${}.{frac}", group_thousands(whole))
}

/// `1234567` -> `1,234,567`.
#[must_use]
pub fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole-number count with thousands separators.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_count(value: f64) -> String {
    let rounded = if value.is_finite() { value.round() } else { 0.0 };
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}{}", group_thousands(&(rounded.abs() as u64).to_string()))
}

/// Name for a user row: full name, else the e-mail local part, else
/// `Unknown User`.
#[must_use]
pub fn display_name(fullname: Option<&str>, email: &str) -> String {
    if let Some(name) = fullname.map(str::trim).filter(|n| !n.is_empty()) {
        return name.to_owned();
    }
    email
        .split('@')
        .next()
        .map(str::trim)
        .filter(|local| !local.is_empty())
        .map_or_else(|| "Unknown User".to_owned(), str::to_owned)
}

/// Name for a subscriber row: full name, else `first last`, else `User {id}`.
#[must_use]
pub fn subscriber_name(user: &PaymentUser) -> String {
    if let Some(name) = user.fullname.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        return name.to_owned();
    }
    let joined = format!("{} {}", user.first_name.trim(), user.last_name.trim());
    let joined = joined.trim();
    if joined.is_empty() { format!("User {}", user.id) } else { joined.to_owned() }
}

/// Protection tier implied by a plan price.
#[must_use]
pub fn subscription_tier(price: f64) -> &'static str {
    if price <= 0.0 {
        "Basic Protection"
    } else if price <= 14.99 {
        "Silver Protection"
    } else if price <= 29.99 {
        "Gold Protection"
    } else {
        "Premium Protection"
    }
}

/// `US$ 10 OFF*` for a product priced down from `old_price` to `new_price`.
#[must_use]
pub fn discount_label(old_price: &str, new_price: &str) -> String {
    let discount = parse_price(old_price) - parse_price(new_price);
    format!("US$ {discount:.0} OFF*")
}

/// Number of star glyphs in a review rating such as `"⭐⭐⭐"`.
#[must_use]
pub fn star_count(rating: &str) -> usize {
    rating.matches('⭐').count()
}

/// Billing period noun for a plan's cycle.
#[must_use]
pub fn billing_period(cycle: &str) -> &'static str {
    if cycle.eq_ignore_ascii_case("monthly") { "month" } else { "year" }
}

/// Signed growth label, e.g. `+12.5%`.
#[must_use]
pub fn growth_label(percentage: f64) -> String {
    let sign = if percentage >= 0.0 { "+" } else { "" };
    format!("{sign}{percentage:.1}%")
}
