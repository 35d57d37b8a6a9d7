use super::*;

fn draft(title: &str, price: &str, cycle: &str) -> PlanDraft {
    PlanDraft {
        title: title.to_owned(),
        price: price.to_owned(),
        billing_cycle: cycle.to_owned(),
        description: "  Covers one device  ".to_owned(),
    }
}

#[test]
fn validate_plan_trims_fields() {
    let clean = validate_plan(&draft(" Gold ", " 29.99 ", "yearly")).unwrap();
    assert_eq!(clean.title, "Gold");
    assert_eq!(clean.price, "29.99");
    assert_eq!(clean.billing_cycle, "yearly");
    assert_eq!(clean.description, "Covers one device");
}

#[test]
fn validate_plan_defaults_cycle() {
    assert_eq!(validate_plan(&draft("Basic", "0", " ")).unwrap().billing_cycle, "monthly");
}

#[test]
fn validate_plan_requires_title() {
    assert_eq!(validate_plan(&draft("  ", "1", "monthly")), Err("Title is required"));
}

#[test]
fn validate_plan_rejects_bad_price() {
    let message = Err("Price must be a number of zero or more");
    assert_eq!(validate_plan(&draft("Gold", "", "monthly")), message);
    assert_eq!(validate_plan(&draft("Gold", "abc", "monthly")), message);
    assert_eq!(validate_plan(&draft("Gold", "-1", "monthly")), message);
}
