//! Notification service
//!
//! Stores email/SMS/push notification records and exposes lookups by
//! recipient and by linked order. Invoked synchronously; there is no queue
//! behind it.

pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod repository;
pub mod service;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{self, AppState};
use crate::config::ServiceConfig;
use crate::db::Database;

pub use error::NotificationError;
pub use models::{
    Notification, NotificationRequest, NotificationResponse, NotificationStatus, NotificationType,
};
pub use repository::NotificationRepository;
pub use service::NotificationService;

/// Start the notification service HTTP server
pub async fn run_server(cfg: &ServiceConfig, db: Arc<Database>) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new(db));

    let notification_routes = Router::new()
        .route(
            "/",
            post(handlers::send_notification).get(handlers::get_all_notifications),
        )
        .route("/recipient/{recipient}", get(handlers::get_by_recipient))
        .route("/order/{order_id}", get(handlers::get_by_order_id));

    let app = Router::new()
        .route("/api/v1/health", get(api::health_check))
        .nest("/api/v1/notifications", notification_routes)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()));

    let addr = format!("{}:{}", cfg.host, cfg.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", addr, e))?;

    println!("🚀 notification-service listening on http://{}", addr);
    println!("📖 API Docs: http://{}/docs", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
