use thiserror::Error;

use crate::api::ApiError;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found with ID: {0}")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        match &err {
            ProductError::NotFound(_) => ApiError::not_found(err.to_string()),
            ProductError::Database(e) => {
                tracing::error!("Unexpected database error: {}", e);
                ApiError::internal("An unexpected error occurred. Please try again later.")
            }
        }
    }
}
