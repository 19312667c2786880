//! End-to-end order lifecycle scenario at the value level (no database).
//!
//! Walks one order through the full happy path and checks every rejection
//! along the way: PENDING -> CONFIRMED -> SHIPPED -> DELIVERED, with an
//! illegal shortcut, a late cancel, and a late structural edit all refused.

use chrono::Utc;
use rust_decimal::Decimal;

use commerce_services::orders::{
    Order, OrderStatus, compute_total, guard_cancel, guard_structural_mutation,
    validate_transition,
};

fn dec(s: &str) -> Decimal {
    s.parse().expect("valid decimal literal")
}

/// Build an order value the way the create path does: PENDING, derived total
fn new_pending_order(quantity: i32, unit_price: Decimal) -> Order {
    let now = Utc::now();
    Order {
        id: 1,
        customer_id: "CUST-1001".to_string(),
        product_id: 42,
        product_name: "Mechanical Keyboard".to_string(),
        quantity,
        unit_price,
        total_amount: compute_total(quantity, unit_price),
        status: OrderStatus::Pending,
        order_date: now,
        updated_at: now,
    }
}

/// Apply a status update the way the service does: validate, then write
fn apply_status(order: &mut Order, requested: OrderStatus) -> bool {
    if validate_transition(order.status, requested).is_ok() {
        order.status = requested;
        order.updated_at = Utc::now();
        true
    } else {
        false
    }
}

#[test]
fn full_lifecycle_scenario() {
    // Create: qty=2, price=25.50 -> total 51.00, status PENDING
    let mut order = new_pending_order(2, dec("25.50"));
    assert_eq!(order.total_amount, dec("51.00"));
    assert_eq!(order.status, OrderStatus::Pending);

    // PENDING -> CONFIRMED succeeds
    assert!(apply_status(&mut order, OrderStatus::Confirmed));
    assert_eq!(order.status, OrderStatus::Confirmed);

    // CONFIRMED -> DELIVERED directly is rejected (must go through SHIPPED)
    assert!(!apply_status(&mut order, OrderStatus::Delivered));
    assert_eq!(order.status, OrderStatus::Confirmed);

    // CONFIRMED -> SHIPPED -> DELIVERED succeeds
    assert!(apply_status(&mut order, OrderStatus::Shipped));
    assert!(apply_status(&mut order, OrderStatus::Delivered));
    assert_eq!(order.status, OrderStatus::Delivered);

    // Cancel after delivery is rejected
    assert!(guard_cancel(order.status).is_err());

    // Structural update (e.g. changing quantity) after delivery is rejected
    assert!(guard_structural_mutation(order.status).is_err());
    assert_eq!(order.total_amount, dec("51.00"));
}

#[test]
fn cancel_path_bypasses_transition_table_for_shipped() {
    let mut order = new_pending_order(1, dec("10.00"));
    assert!(apply_status(&mut order, OrderStatus::Confirmed));
    assert!(apply_status(&mut order, OrderStatus::Shipped));

    // The general path refuses SHIPPED -> CANCELLED...
    assert!(validate_transition(order.status, OrderStatus::Cancelled).is_err());
    // ...but the dedicated cancel path allows it
    assert!(guard_cancel(order.status).is_ok());
    order.status = OrderStatus::Cancelled;

    // Once cancelled, no further status updates are accepted
    for next in [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ] {
        assert!(!apply_status(&mut order, next));
    }

    // A cancelled order is still structurally editable: the update path
    // recomputes the total from the edited fields
    assert!(guard_structural_mutation(order.status).is_ok());
    order.quantity = 3;
    order.total_amount = compute_total(order.quantity, order.unit_price);
    assert_eq!(order.total_amount, dec("30.00"));
}

#[test]
fn total_recomputation_overwrites_stale_values() {
    let mut order = new_pending_order(2, dec("25.50"));

    // Structural update while PENDING: new quantity and price, total derived
    assert!(guard_structural_mutation(order.status).is_ok());
    order.quantity = 4;
    order.unit_price = dec("12.25");
    order.total_amount = compute_total(order.quantity, order.unit_price);
    assert_eq!(order.total_amount, dec("49.00"));

    // Recomputing on unchanged inputs is bit-identical
    let again = compute_total(order.quantity, order.unit_price);
    assert_eq!(again.mantissa(), order.total_amount.mantissa());
    assert_eq!(again.scale(), order.total_amount.scale());
}
