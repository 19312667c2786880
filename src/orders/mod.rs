//! Order service
//!
//! REST CRUD for customer orders plus the order lifecycle rules:
//! - [`lifecycle`] - status transition table, derived total, mutation guards
//! - [`models`] - Order entity and DTOs
//! - [`repository`] - sqlx persistence
//! - [`service`] - business logic
//! - [`handlers`] - axum handlers

pub mod error;
pub mod handlers;
pub mod lifecycle;
pub mod models;
pub mod openapi;
pub mod repository;
pub mod service;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, patch, post},
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{self, AppState};
use crate::config::ServiceConfig;
use crate::db::Database;

pub use error::OrderError;
pub use lifecycle::{
    MutationError, OrderStatus, TransitionError, compute_total, guard_cancel,
    guard_structural_mutation, validate_transition,
};
pub use models::{Order, OrderRequest, OrderResponse, OrderStatusUpdateRequest};
pub use repository::OrderRepository;
pub use service::OrderService;

/// Start the order service HTTP server
pub async fn run_server(cfg: &ServiceConfig, db: Arc<Database>) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new(db));

    let order_routes = Router::new()
        .route("/", post(handlers::create_order).get(handlers::get_all_orders))
        .route("/recent", get(handlers::get_recent_orders))
        .route(
            "/{id}",
            get(handlers::get_order_by_id)
                .put(handlers::update_order)
                .delete(handlers::cancel_order),
        )
        .route("/{id}/status", patch(handlers::update_order_status))
        .route("/customer/{customer_id}", get(handlers::get_orders_by_customer))
        .route("/status/{status}", get(handlers::get_orders_by_status));

    let app = Router::new()
        .route("/api/v1/health", get(api::health_check))
        .nest("/api/v1/orders", order_routes)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()));

    let addr = format!("{}:{}", cfg.host, cfg.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", addr, e))?;

    println!("🚀 order-service listening on http://{}", addr);
    println!("📖 API Docs: http://{}/docs", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
