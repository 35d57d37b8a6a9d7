use super::*;
use serde_json::json;

// =============================================================
// Lenient numeric / scalar fields
// =============================================================

#[test]
fn managed_user_accepts_string_and_float_ids() {
    let from_str: ManagedUser = serde_json::from_value(json!({"id": "12", "email": "a@b.c"})).unwrap();
    assert_eq!(from_str.id, 12);
    let from_float: ManagedUser = serde_json::from_value(json!({"id": 13.0, "email": "a@b.c"})).unwrap();
    assert_eq!(from_float.id, 13);
}

#[test]
fn managed_user_rejects_fractional_id() {
    let err = serde_json::from_value::<ManagedUser>(json!({"id": 1.5}));
    assert!(err.is_err());
}

#[test]
fn managed_user_missing_active_flag_counts_as_active() {
    let user: ManagedUser = serde_json::from_value(json!({"id": 1, "Fullname": "Ada"})).unwrap();
    assert_eq!(user.fullname.as_deref(), Some("Ada"));
    assert!(user.active());

    let blocked: ManagedUser = serde_json::from_value(json!({"id": 2, "is_active": false})).unwrap();
    assert!(!blocked.active());
}

#[test]
fn plan_price_accepts_numbers() {
    let plan: SubscriptionPlan = serde_json::from_value(json!({
        "id": 3,
        "title": "Gold",
        "Description": "All devices",
        "price": 29.99,
        "billing_cycle": "monthly",
        "features": [{"id": 1, "description": "VPN"}]
    }))
    .unwrap();
    assert_eq!(plan.price, "29.99");
    assert_eq!(plan.description, "All devices");
    assert_eq!(plan.features.len(), 1);
}

#[test]
fn payment_tolerates_missing_nested_objects() {
    let payment: Payment = serde_json::from_value(json!({"id": 9, "amount": null})).unwrap();
    assert_eq!(payment.user, PaymentUser::default());
    assert!(payment.subscription.is_none());
    assert!(payment.amount.is_empty());
}

// =============================================================
// Drafts
// =============================================================

#[test]
fn plan_draft_serializes_capitalized_description() {
    let draft = PlanDraft {
        title: "Silver".to_owned(),
        price: "14.99".to_owned(),
        billing_cycle: "yearly".to_owned(),
        description: "Two devices".to_owned(),
    };
    let value = serde_json::to_value(&draft).unwrap();
    assert_eq!(value["Description"], "Two devices");
    assert!(value.get("description").is_none());
}

#[test]
fn faq_draft_defaults_to_published() {
    assert!(FaqDraft::default().is_published);
}

#[test]
fn product_draft_defaults_to_monthly_and_copies_product() {
    assert_eq!(ProductDraft::default().billing_cycle, "monthly");

    let product: Product = serde_json::from_value(json!({
        "id": 4,
        "title": "Shield",
        "old_price": "30.00",
        "new_price": 20,
        "billing_cycle": "yearly",
        "add_link": "https://example.com"
    }))
    .unwrap();
    let draft = ProductDraft::from(&product);
    assert_eq!(draft.new_price, "20");
    assert_eq!(draft.billing_cycle, "yearly");
    assert_eq!(draft.add_link, "https://example.com");
}

#[test]
fn empty_page_defaults_to_first_page() {
    let page: Page<Faq> = Page::default();
    assert!(page.items.is_empty());
    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 0);
}
