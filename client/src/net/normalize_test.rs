use super::*;
use crate::net::types::{Faq, ManagedUser, Product, Review, SubscriptionPlan};
use access::Role;
use serde_json::json;

// =============================================================
// number_value / find_number
// =============================================================

#[test]
fn number_value_coerces_scalars() {
    assert!((number_value(&json!(12)) - 12.0).abs() < f64::EPSILON);
    assert!((number_value(&json!("1520.50")) - 1520.5).abs() < f64::EPSILON);
    assert!(number_value(&json!("abc")).abs() < f64::EPSILON);
    assert!(number_value(&Value::Null).abs() < f64::EPSILON);
    assert!(number_value(&json!({"n": 1})).abs() < f64::EPSILON);
}

#[test]
fn find_number_checks_top_level_then_data() {
    assert_eq!(find_number(&json!({"total_users": 42}), &["total_users"]), Some(42.0));
    assert_eq!(find_number(&json!({"data": {"total_users": "7"}}), &["total_users"]), Some(7.0));
    assert_eq!(find_number(&json!({"total_users": null, "data": {"total_users": 3}}), &["total_users"]), Some(3.0));
    assert_eq!(find_number(&json!({"other": 1}), &["total_users"]), None);
}

// =============================================================
// check_rejection
// =============================================================

#[test]
fn success_false_is_rejected_with_message() {
    let err = check_rejection(&json!({"success": false, "message": "No plans"})).unwrap_err();
    assert_eq!(err, ApiError::Rejected("No plans".to_owned()));
}

#[test]
fn error_field_is_rejected() {
    let err = check_rejection(&json!({"error": "bad input"})).unwrap_err();
    assert_eq!(err, ApiError::Rejected("bad input".to_owned()));
    assert!(check_rejection(&json!({"error": ""})).is_ok());
    assert!(check_rejection(&json!({"success": true, "data": []})).is_ok());
}

// =============================================================
// normalize_page
// =============================================================

#[test]
fn page_from_results_total_envelope() {
    let body = json!({
        "total": 23,
        "page": 2,
        "page_size": 10,
        "total_pages": 3,
        "results": [{"id": 11, "Fullname": "Ada", "email": "ada@example.com", "date_joined": "2024-01-05T00:00:00Z"}]
    });
    let page: Page<ManagedUser> = normalize_page(body, 2, 10).unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total, 23);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.page, 2);
}

#[test]
fn page_from_count_envelope_computes_pages() {
    let body = json!({
        "count": 21,
        "next": "http://api/service/faq/?page=2",
        "previous": null,
        "results": [{"id": 1, "question": "Q", "answer": "A", "is_published": true}]
    });
    let page: Page<Faq> = normalize_page(body, 1, 10).unwrap();
    assert_eq!(page.total, 21);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.page, 1);
}

#[test]
fn page_from_nested_data_envelope() {
    let body = json!({"data": {"count": 4, "results": [{"id": 1}, {"id": 2}]}});
    let page: Page<Faq> = normalize_page(body, 1, 2).unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total, 4);
    assert_eq!(page.total_pages, 2);
}

#[test]
fn page_from_bare_array_uses_item_count() {
    let body = json!([{"id": 1, "rating": "⭐⭐"}, {"id": 2, "rating": "⭐"}]);
    let page: Page<Review> = normalize_page(body, 0, 5).unwrap();
    assert_eq!(page.total, 2);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.page, 1);
}

#[test]
fn page_without_items_is_decode_error() {
    let err = normalize_page::<Faq>(json!({"count": 3}), 1, 10).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

// =============================================================
// normalize_list / normalize_object
// =============================================================

#[test]
fn list_from_success_data_envelope() {
    let body = json!({"success": true, "message": "ok", "data": [{"id": 1, "title": "Basic", "price": "0.00"}]});
    let plans: Vec<SubscriptionPlan> = normalize_list(body).unwrap();
    assert_eq!(plans[0].title, "Basic");
}

#[test]
fn list_from_each_product_shape() {
    let item = json!({"id": 5, "title": "Shield"});
    for body in [json!({"results": [item.clone()]}), json!({"data": [item.clone()]}), json!([item.clone()])] {
        let products: Vec<Product> = normalize_list(body).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, 5);
    }
}

#[test]
fn list_with_error_is_rejected() {
    let err = normalize_list::<Product>(json!({"error": "forbidden"})).unwrap_err();
    assert_eq!(err, ApiError::Rejected("forbidden".to_owned()));
}

#[test]
fn object_unwraps_data() {
    let faq: Faq = normalize_object(json!({"data": {"id": 3, "question": "Q"}})).unwrap();
    assert_eq!(faq.id, 3);
    let bare: Faq = normalize_object(json!({"id": 4, "question": "Q"})).unwrap();
    assert_eq!(bare.id, 4);
}

#[test]
fn detail_message_falls_back() {
    assert_eq!(detail_message(&json!({"detail": "User blocked"}), "done"), "User blocked");
    assert_eq!(detail_message(&Value::Null, "done"), "done");
}

// =============================================================
// parse_login_response
// =============================================================

#[test]
fn login_success_derives_profile() {
    let body = json!({"access": "jwt-token", "user": {"id": 1, "email": "ops@example.com", "is_staff": true}});
    let outcome = parse_login_response(&body).unwrap();
    assert_eq!(outcome.token, "jwt-token");
    assert_eq!(outcome.profile.role, Role::Admin);
    assert_eq!(outcome.profile.email, "ops@example.com");
}

#[test]
fn login_without_user_is_regular() {
    let outcome = parse_login_response(&json!({"access": "t"})).unwrap();
    assert_eq!(outcome.profile.role, Role::Regular);
}

#[test]
fn login_failure_surfaces_server_message() {
    let err = parse_login_response(&json!({"message": "Invalid credentials"})).unwrap_err();
    assert_eq!(err, ApiError::Rejected("Invalid credentials".to_owned()));

    let err = parse_login_response(&json!({"error": "Account disabled"})).unwrap_err();
    assert_eq!(err, ApiError::Rejected("Account disabled".to_owned()));
}

#[test]
fn login_failure_defaults_message() {
    let err = parse_login_response(&json!({"user": {"id": 1}, "access": ""})).unwrap_err();
    assert_eq!(err, ApiError::Rejected(login_failed_message().to_owned()));
}

// =============================================================
// parse_earnings_overview
// =============================================================

#[test]
fn earnings_overview_reads_top_level() {
    let body = json!({"earnings": [{"month": "Jan", "total": "100.5"}, {"month": "Feb", "total": 200}], "growth_percentage": 12.5});
    let overview = parse_earnings_overview(&body);
    assert_eq!(overview.points.len(), 2);
    assert_eq!(overview.points[0].month, "Jan");
    assert!((overview.points[0].revenue - 100.5).abs() < f64::EPSILON);
    assert!((overview.growth_percentage - 12.5).abs() < f64::EPSILON);
}

#[test]
fn earnings_overview_reads_data_envelope_and_tolerates_junk() {
    let body = json!({"data": {"earnings": [{"total": null}], "growth_percentage": "3"}});
    let overview = parse_earnings_overview(&body);
    assert_eq!(overview.points[0].month, "");
    assert!(overview.points[0].revenue.abs() < f64::EPSILON);
    assert!((overview.growth_percentage - 3.0).abs() < f64::EPSILON);

    assert_eq!(parse_earnings_overview(&json!("oops")), EarningsOverview::default());
}
