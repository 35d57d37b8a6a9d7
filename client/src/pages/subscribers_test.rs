use super::*;
use crate::net::types::{PaymentUser, SubscriptionPlan};

fn payment(id: i64, fullname: Option<&str>, price: &str) -> Payment {
    Payment {
        id,
        user: PaymentUser {
            id: id * 10,
            email: format!("user{id}@example.com"),
            fullname: fullname.map(str::to_owned),
            is_active: true,
            ..PaymentUser::default()
        },
        subscription: Some(SubscriptionPlan {
            id: 1,
            title: "Plan".to_owned(),
            description: String::new(),
            price: price.to_owned(),
            billing_cycle: "monthly".to_owned(),
            features: Vec::new(),
        }),
        amount: "1520.5".to_owned(),
        transaction_id: String::new(),
        invoice_id: String::new(),
        status: "completed".to_owned(),
        payment_date: "2024-01-05T00:00:00Z".to_owned(),
    }
}

#[test]
fn row_maps_payment_fields() {
    let row = SubscriberRow::from(&payment(3, Some("Ada"), "29.99"));
    assert_eq!(row.name, "Ada");
    assert_eq!(row.email, "user3@example.com");
    assert_eq!(row.registered, "January 5, 2024");
    assert_eq!(row.tier, "Gold Protection");
    assert_eq!(row.amount, "$1,520.50");
    assert!(row.active);
}

#[test]
fn row_without_subscription_is_basic() {
    let mut p = payment(4, None, "0");
    p.subscription = None;
    let row = SubscriberRow::from(&p);
    assert_eq!(row.tier, "Basic Protection");
    assert_eq!(row.name, "User 40");
}

#[test]
fn filter_matches_name_email_and_tier() {
    let rows: Vec<SubscriberRow> = [payment(1, Some("Ada"), "9.99"), payment(2, Some("Grace"), "49")]
        .iter()
        .map(SubscriberRow::from)
        .collect();
    assert_eq!(filter_rows(&rows, "").len(), 2);
    assert_eq!(filter_rows(&rows, " ada ")[0].id, 1);
    assert_eq!(filter_rows(&rows, "USER2@")[0].id, 2);
    assert_eq!(filter_rows(&rows, "premium")[0].id, 2);
    assert!(filter_rows(&rows, "nobody").is_empty());
}
