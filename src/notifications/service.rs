//! Notification service - synchronous record-keeping
//!
//! "Sending" stores the record with status SENT and a send timestamp; there
//! is no queue or delivery backend behind it.

use sqlx::PgPool;

use super::error::NotificationError;
use super::models::{Notification, NotificationRequest};
use super::repository::NotificationRepository;

pub struct NotificationService;

impl NotificationService {
    pub async fn send_notification(
        pool: &PgPool,
        req: &NotificationRequest,
    ) -> Result<Notification, NotificationError> {
        tracing::info!(
            "Sending {} notification to: {}",
            req.notification_type,
            req.recipient
        );

        let notification = NotificationRepository::create_sent(
            pool,
            req.notification_type,
            &req.recipient,
            &req.subject,
            &req.message,
            req.order_id.as_deref(),
        )
        .await?;

        tracing::info!(
            "Notification sent successfully with ID: {}",
            notification.id
        );
        Ok(notification)
    }

    pub async fn list_notifications(pool: &PgPool) -> Result<Vec<Notification>, NotificationError> {
        tracing::info!("Fetching all notifications");

        Ok(NotificationRepository::list_all(pool).await?)
    }

    pub async fn notifications_by_recipient(
        pool: &PgPool,
        recipient: &str,
    ) -> Result<Vec<Notification>, NotificationError> {
        tracing::info!("Fetching notifications for recipient: {}", recipient);

        Ok(NotificationRepository::find_by_recipient(pool, recipient).await?)
    }

    pub async fn notifications_by_order(
        pool: &PgPool,
        order_id: &str,
    ) -> Result<Vec<Notification>, NotificationError> {
        tracing::info!("Fetching notifications for order: {}", order_id);

        Ok(NotificationRepository::find_by_order_id(pool, order_id).await?)
    }
}
