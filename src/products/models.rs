//! Product entity and request/response DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::Row;
use sqlx::postgres::PgRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Product record as stored in PostgreSQL
#[derive(Debug, Clone)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock_quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Map a database row to a Product
    pub fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Product {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
            stock_quantity: row.try_get("stock_quantity")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() {
        let mut err = ValidationError::new("range");
        err.message = Some("Price must not be negative".into());
        return Err(err);
    }
    Ok(())
}

/// Product creation / update payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ProductRequest {
    #[validate(length(min = 1, max = 100, message = "Product name is required"))]
    #[schema(example = "Mechanical Keyboard")]
    pub name: String,
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    #[schema(example = "Tenkeyless, hot-swappable switches")]
    pub description: Option<String>,
    #[validate(custom(function = validate_price))]
    #[schema(example = "89.99")]
    pub price: Decimal,
    #[validate(range(min = 0, message = "Stock quantity must not be negative"))]
    #[schema(example = 120)]
    pub stock_quantity: i32,
}

/// Product response data
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    #[schema(example = "89.99")]
    pub price: Decimal,
    pub stock_quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            stock_quantity: product.stock_quantity,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> ProductRequest {
        ProductRequest {
            name: "Mechanical Keyboard".to_string(),
            description: Some("Tenkeyless".to_string()),
            price: "89.99".parse().unwrap(),
            stock_quantity: 120,
        }
    }

    #[test]
    fn test_valid_request_passes_validation() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut req = valid_request();
        req.name = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut req = valid_request();
        req.price = "-0.01".parse().unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));
    }

    #[test]
    fn test_negative_stock_rejected() {
        let mut req = valid_request();
        req.stock_quantity = -1;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_missing_description_accepted() {
        let mut req = valid_request();
        req.description = None;
        assert!(req.validate().is_ok());
    }
}
