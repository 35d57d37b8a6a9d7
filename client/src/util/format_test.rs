use super::*;

// =============================================================
// Dates
// =============================================================

#[test]
fn dates_accept_rfc3339_naive_and_plain() {
    assert_eq!(format_date_long("2024-01-05T10:30:00Z"), "January 5, 2024");
    assert_eq!(format_date_long("2024-01-05T10:30:00.123456"), "January 5, 2024");
    assert_eq!(format_date_long("2024-11-20"), "November 20, 2024");
    assert_eq!(format_date_short("2024-01-05T10:30:00+02:00"), "Jan 5, 2024");
}

#[test]
fn dates_degrade_without_failing() {
    assert_eq!(format_date_long(""), "N/A");
    assert_eq!(format_date_short("   "), "N/A");
    assert_eq!(format_date_long("yesterday"), "yesterday");
    assert_eq!(parse_date("2024-13-40"), None);
}

// =============================================================
// Money and counts
// =============================================================

#[test]
fn currency_groups_and_rounds() {
    assert_eq!(format_currency(1234.0), "$1,234.00");
    assert_eq!(format_currency(0.0), "$0.00");
    assert_eq!(format_currency(1_520.5), "$1,520.50");
    assert_eq!(format_currency(999.999), "$1,000.00");
    assert_eq!(format_currency(-42.5), "-$42.50");
    assert_eq!(format_currency(f64::NAN), "$0.00");
}

#[test]
fn thousands_grouping() {
    assert_eq!(group_thousands("1"), "1");
    assert_eq!(group_thousands("123"), "123");
    assert_eq!(group_thousands("1234"), "1,234");
    assert_eq!(group_thousands("1234567"), "1,234,567");
    assert_eq!(format_count(12_345.0), "12,345");
    assert_eq!(format_count(f64::INFINITY), "0");
}

#[test]
fn price_parse_is_lenient() {
    assert!((parse_price(" 29.99 ") - 29.99).abs() < f64::EPSILON);
    assert!(parse_price("free").abs() < f64::EPSILON);
    assert!(parse_price("").abs() < f64::EPSILON);
}

// =============================================================
// Names
// =============================================================

#[test]
fn display_name_fallbacks() {
    assert_eq!(display_name(Some("Ada Lovelace"), "ada@example.com"), "Ada Lovelace");
    assert_eq!(display_name(Some("  "), "ada@example.com"), "ada");
    assert_eq!(display_name(None, "ada@example.com"), "ada");
    assert_eq!(display_name(None, ""), "Unknown User");
    assert_eq!(display_name(None, "@example.com"), "Unknown User");
}

#[test]
fn subscriber_name_fallbacks() {
    let mut user = PaymentUser { id: 9, fullname: Some("Grace Hopper".to_owned()), ..PaymentUser::default() };
    assert_eq!(subscriber_name(&user), "Grace Hopper");

    user.fullname = None;
    user.first_name = "Grace".to_owned();
    assert_eq!(subscriber_name(&user), "Grace");

    user.last_name = "Hopper".to_owned();
    assert_eq!(subscriber_name(&user), "Grace Hopper");

    user.first_name.clear();
    user.last_name.clear();
    assert_eq!(subscriber_name(&user), "User 9");
}

// =============================================================
// Plans, products, reviews
// =============================================================

#[test]
fn tier_boundaries() {
    assert_eq!(subscription_tier(0.0), "Basic Protection");
    assert_eq!(subscription_tier(9.99), "Silver Protection");
    assert_eq!(subscription_tier(14.99), "Silver Protection");
    assert_eq!(subscription_tier(15.0), "Gold Protection");
    assert_eq!(subscription_tier(29.99), "Gold Protection");
    assert_eq!(subscription_tier(30.0), "Premium Protection");
}

#[test]
fn discount_label_rounds_difference() {
    assert_eq!(discount_label("49.99", "39.99"), "US$ 10 OFF*");
    assert_eq!(discount_label("100", "100"), "US$ 0 OFF*");
}

#[test]
fn stars_counted_by_glyph() {
    assert_eq!(star_count("⭐⭐⭐"), 3);
    assert_eq!(star_count(""), 0);
    assert_eq!(star_count("5"), 0);
}

#[test]
fn billing_period_maps_cycle() {
    assert_eq!(billing_period("monthly"), "month");
    assert_eq!(billing_period("Monthly"), "month");
    assert_eq!(billing_period("yearly"), "year");
    assert_eq!(billing_period(""), "year");
}

#[test]
fn growth_label_signs() {
    assert_eq!(growth_label(12.5), "+12.5%");
    assert_eq!(growth_label(-3.0), "-3.0%");
    assert_eq!(growth_label(0.0), "+0.0%");
}
