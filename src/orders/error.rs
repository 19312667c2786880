use axum::http::StatusCode;
use thiserror::Error;

use crate::api::{ApiError, error_codes};

use super::lifecycle::{MutationError, TransitionError};

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Order not found with ID: {0}")]
    NotFound(i64),

    #[error(transparent)]
    InvalidTransition(#[from] TransitionError),

    #[error(transparent)]
    ForbiddenMutation(#[from] MutationError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        match &err {
            OrderError::NotFound(_) => ApiError::not_found(err.to_string()),
            OrderError::InvalidTransition(_) => ApiError::new(
                StatusCode::BAD_REQUEST,
                error_codes::INVALID_STATUS_TRANSITION,
                err.to_string(),
            ),
            OrderError::ForbiddenMutation(_) => ApiError::new(
                StatusCode::BAD_REQUEST,
                error_codes::ORDER_LOCKED,
                err.to_string(),
            ),
            OrderError::Database(e) => {
                tracing::error!("Unexpected database error: {}", e);
                ApiError::internal("An unexpected error occurred. Please try again later.")
            }
        }
    }
}
