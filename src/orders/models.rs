//! Order entity and request/response DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::Row;
use sqlx::postgres::PgRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::lifecycle::OrderStatus;

/// Order record as stored in PostgreSQL
///
/// `total_amount` is derived (`unit_price * quantity`) and never taken from a
/// caller; `order_date` is set once on insert, `updated_at` on every write.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: i64,
    pub customer_id: String,
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub order_date: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Map a database row to an Order
    pub fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        let status_str: String = row.try_get("status")?;
        let status = status_str
            .parse::<OrderStatus>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "status".into(),
                source: Box::new(e),
            })?;

        Ok(Order {
            id: row.try_get("id")?,
            customer_id: row.try_get("customer_id")?,
            product_id: row.try_get("product_id")?,
            product_name: row.try_get("product_name")?,
            quantity: row.try_get("quantity")?,
            unit_price: row.try_get("unit_price")?,
            total_amount: row.try_get("total_amount")?,
            status,
            order_date: row.try_get("order_date")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

fn validate_unit_price(unit_price: &Decimal) -> Result<(), ValidationError> {
    if unit_price.is_sign_negative() {
        let mut err = ValidationError::new("range");
        err.message = Some("Unit price must not be negative".into());
        return Err(err);
    }
    Ok(())
}

/// Order creation / structural update payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct OrderRequest {
    #[validate(length(min = 1, max = 50, message = "Customer ID is required"))]
    #[schema(example = "CUST-1001")]
    pub customer_id: String,
    /// Catalog reference; not validated against the product service
    #[schema(example = 42)]
    pub product_id: i64,
    #[validate(length(min = 1, max = 200, message = "Product name is required"))]
    #[schema(example = "Mechanical Keyboard")]
    pub product_name: String,
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    #[schema(example = 2)]
    pub quantity: i32,
    #[validate(custom(function = validate_unit_price))]
    #[schema(example = "25.50")]
    pub unit_price: Decimal,
}

/// Status-only update payload
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct OrderStatusUpdateRequest {
    pub status: OrderStatus,
}

/// Order response data
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub id: i64,
    pub customer_id: String,
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i32,
    #[schema(example = "25.50")]
    pub unit_price: Decimal,
    #[schema(example = "51.00")]
    pub total_amount: Decimal,
    pub status: OrderStatus,
    #[schema(example = "Order created, awaiting confirmation")]
    pub status_description: String,
    pub order_date: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            customer_id: order.customer_id,
            product_id: order.product_id,
            product_name: order.product_name,
            quantity: order.quantity,
            unit_price: order.unit_price,
            total_amount: order.total_amount,
            status: order.status,
            status_description: order.status.description().to_string(),
            order_date: order.order_date,
            updated_at: order.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> OrderRequest {
        OrderRequest {
            customer_id: "CUST-1001".to_string(),
            product_id: 42,
            product_name: "Mechanical Keyboard".to_string(),
            quantity: 2,
            unit_price: "25.50".parse().unwrap(),
        }
    }

    #[test]
    fn test_valid_request_passes_validation() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_empty_customer_id_rejected() {
        let mut req = valid_request();
        req.customer_id = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut req = valid_request();
        req.quantity = 0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_negative_unit_price_rejected() {
        let mut req = valid_request();
        req.unit_price = "-1.00".parse().unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("unit_price"));
    }

    #[test]
    fn test_zero_unit_price_accepted() {
        let mut req = valid_request();
        req.unit_price = "0.00".parse().unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_response_carries_status_description() {
        let order = Order {
            id: 1,
            customer_id: "CUST-1001".to_string(),
            product_id: 42,
            product_name: "Mechanical Keyboard".to_string(),
            quantity: 2,
            unit_price: "25.50".parse().unwrap(),
            total_amount: "51.00".parse().unwrap(),
            status: OrderStatus::Pending,
            order_date: Utc::now(),
            updated_at: Utc::now(),
        };

        let resp = OrderResponse::from(order);
        assert_eq!(resp.status, OrderStatus::Pending);
        assert_eq!(
            resp.status_description,
            "Order created, awaiting confirmation"
        );
        assert_eq!(resp.total_amount, "51.00".parse().unwrap());
    }
}
