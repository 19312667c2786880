use thiserror::Error;

use crate::api::ApiError;

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<NotificationError> for ApiError {
    fn from(err: NotificationError) -> Self {
        match &err {
            NotificationError::Database(e) => {
                tracing::error!("Unexpected database error: {}", e);
                ApiError::internal("An unexpected error occurred. Please try again later.")
            }
        }
    }
}
