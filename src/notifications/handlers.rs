//! Notification REST handlers

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::{ApiError, ApiResult, AppState, created, ok, validation_msg};

use super::models::{NotificationRequest, NotificationResponse};
use super::service::NotificationService;

/// Send a notification
///
/// POST /api/v1/notifications
#[utoipa::path(
    post,
    path = "/api/v1/notifications",
    request_body = NotificationRequest,
    responses(
        (status = 201, description = "Notification sent successfully", body = NotificationResponse),
        (status = 400, description = "Invalid input")
    ),
    tag = "Notification Management"
)]
pub async fn send_notification(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NotificationRequest>,
) -> ApiResult<NotificationResponse> {
    tracing::info!("REST request to send notification to: {}", req.recipient);

    req.validate()
        .map_err(|e| ApiError::bad_request(validation_msg(&e)))?;

    let notification = NotificationService::send_notification(state.db.pool(), &req).await?;
    created(NotificationResponse::from(notification))
}

/// Get all notifications
///
/// GET /api/v1/notifications
#[utoipa::path(
    get,
    path = "/api/v1/notifications",
    responses(
        (status = 200, description = "Successfully retrieved list", body = [NotificationResponse])
    ),
    tag = "Notification Management"
)]
pub async fn get_all_notifications(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Vec<NotificationResponse>> {
    tracing::info!("REST request to get all notifications");

    let notifications = NotificationService::list_notifications(state.db.pool()).await?;
    ok(notifications
        .into_iter()
        .map(NotificationResponse::from)
        .collect())
}

/// Get notifications by recipient
///
/// GET /api/v1/notifications/recipient/{recipient}
#[utoipa::path(
    get,
    path = "/api/v1/notifications/recipient/{recipient}",
    params(("recipient" = String, Path, description = "Recipient address")),
    responses(
        (status = 200, description = "Successfully retrieved notifications", body = [NotificationResponse])
    ),
    tag = "Notification Management"
)]
pub async fn get_by_recipient(
    State(state): State<Arc<AppState>>,
    Path(recipient): Path<String>,
) -> ApiResult<Vec<NotificationResponse>> {
    tracing::info!(
        "REST request to get notifications for recipient: {}",
        recipient
    );

    let notifications =
        NotificationService::notifications_by_recipient(state.db.pool(), &recipient).await?;
    ok(notifications
        .into_iter()
        .map(NotificationResponse::from)
        .collect())
}

/// Get notifications by order
///
/// GET /api/v1/notifications/order/{order_id}
#[utoipa::path(
    get,
    path = "/api/v1/notifications/order/{order_id}",
    params(("order_id" = String, Path, description = "Linked order identifier")),
    responses(
        (status = 200, description = "Successfully retrieved notifications", body = [NotificationResponse])
    ),
    tag = "Notification Management"
)]
pub async fn get_by_order_id(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
) -> ApiResult<Vec<NotificationResponse>> {
    tracing::info!("REST request to get notifications for order: {}", order_id);

    let notifications =
        NotificationService::notifications_by_order(state.db.pool(), &order_id).await?;
    ok(notifications
        .into_iter()
        .map(NotificationResponse::from)
        .collect())
}
