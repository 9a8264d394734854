use pastry_shop::domain::cart::{CartKey, CartLineItem};
use pastry_shop::domain::order::OrderStatus;
use pastry_shop::forms::orders::{CheckoutForm, UpdateOrderForm};
use pastry_shop::repository::{DieselRepository, OrderReader};
use pastry_shop::services::ServiceError;
use pastry_shop::services::orders;

mod common;

fn checkout_form() -> CheckoutForm {
    let items = vec![
        CartLineItem::new(
            CartKey::standard(1, Some("Framboise".to_string()), Some("4 parts".to_string())),
            "Tarte (Framboise, 4 parts)",
            "12,50 €",
            "",
        )
        .with_quantity(2),
        CartLineItem::new(CartKey::standard(2, None, None), "Sablé", "invalid", ""),
    ];

    serde_json::from_value(serde_json::json!({
        "client": {"name": "Marie", "phone": "0612345678", "email": "marie@example.com"},
        "pickup": {"date": "2024-12-24", "time": "10h-11h"},
        "items": items,
    }))
    .expect("valid checkout payload")
}

#[test]
fn checkout_then_status_patch_changes_only_status() {
    let test_db = common::TestDb::new("service_checkout_then_status_patch.db");
    let repo = DieselRepository::new(test_db.pool());

    let placed = orders::checkout(&repo, checkout_form()).expect("checkout");
    assert_eq!(placed.status, OrderStatus::Pending);
    assert_eq!(placed.total_price, "25.00");
    assert_eq!(placed.items.len(), 2);
    assert!(placed.code.starts_with("CMD-"));

    let patch: UpdateOrderForm =
        serde_json::from_value(serde_json::json!({"status": "ready"})).expect("valid patch");
    let updated = orders::update_order(&repo, placed.id, patch).expect("update");

    assert_eq!(updated.status, OrderStatus::Ready);
    assert_eq!(updated.code, placed.code);
    assert_eq!(updated.client, placed.client);
    assert_eq!(updated.pickup, placed.pickup);
    assert_eq!(updated.items, placed.items);
    assert_eq!(updated.total_price, placed.total_price);
    assert!(updated.notes.is_none());

    let stored = repo.get_order_by_id(placed.id).unwrap().unwrap();
    assert_eq!(stored.status, OrderStatus::Ready);
}

#[test]
fn updating_missing_order_is_not_found() {
    let test_db = common::TestDb::new("service_updating_missing_order.db");
    let repo = DieselRepository::new(test_db.pool());

    let patch = UpdateOrderForm {
        status: Some("cancelled".to_string()),
        ..UpdateOrderForm::default()
    };

    assert!(matches!(
        orders::update_order(&repo, 404, patch),
        Err(ServiceError::NotFound)
    ));
}
