//! Product catalog service
//!
//! Plain REST CRUD over the product table, plus catalog search and an
//! in-stock listing. No lifecycle rules here; products are hard-deleted.

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

pub use error::ProductError;
pub use models::{Product, ProductRequest, ProductResponse};
pub use repository::ProductRepository;
pub use service::ProductService;

/// Start the product service HTTP server
pub async fn run_server(cfg: &ServiceConfig, db: Arc<Database>) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new(db));

    let product_routes = Router::new()
        .route(
            "/",
            post(handlers::create_product).get(handlers::get_all_products),
        )
        .route("/search", get(handlers::search_products))
        .route("/in-stock", get(handlers::get_products_in_stock))
        .route(
            "/{id}",
            get(handlers::get_product_by_id)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        );

    let app = Router::new()
        .route("/api/v1/health", get(api::health_check))
        .nest("/api/v1/products", product_routes)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()));

    let addr = format!("{}:{}", cfg.host, cfg.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", addr, e))?;

    println!("🚀 product-service listening on http://{}", addr);
    println!("📖 API Docs: http://{}/docs", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
