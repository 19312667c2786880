//! Product REST handlers

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::api::{ApiError, ApiResult, AppState, created, ok, validation_msg};

use super::models::{ProductRequest, ProductResponse};
use super::service::ProductService;

/// Search query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchParams {
    /// Search term matched against name and description
    #[serde(default)]
    pub term: String,
}

/// Create a new product
///
/// POST /api/v1/products
#[utoipa::path(
    post,
    path = "/api/v1/products",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created successfully", body = ProductResponse),
        (status = 400, description = "Invalid input")
    ),
    tag = "Product Management"
)]
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ProductRequest>,
) -> ApiResult<ProductResponse> {
    tracing::info!("REST request to create product: {}", req.name);

    req.validate()
        .map_err(|e| ApiError::bad_request(validation_msg(&e)))?;

    let product = ProductService::create_product(state.db.pool(), &req).await?;
    created(ProductResponse::from(product))
}

/// Get product by ID
///
/// GET /api/v1/products/{id}
#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 404, description = "Product not found")
    ),
    tag = "Product Management"
)]
pub async fn get_product_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<ProductResponse> {
    tracing::info!("REST request to get product with ID: {}", id);

    let product = ProductService::get_product(state.db.pool(), id).await?;
    ok(ProductResponse::from(product))
}

/// Get all products
///
/// GET /api/v1/products
#[utoipa::path(
    get,
    path = "/api/v1/products",
    responses(
        (status = 200, description = "Successfully retrieved list", body = [ProductResponse])
    ),
    tag = "Product Management"
)]
pub async fn get_all_products(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Vec<ProductResponse>> {
    tracing::info!("REST request to get all products");

    let products = ProductService::list_products(state.db.pool()).await?;
    ok(products.into_iter().map(ProductResponse::from).collect())
}

/// Update an existing product
///
/// PUT /api/v1/products/{id}
#[utoipa::path(
    put,
    path = "/api/v1/products/{id}",
    params(("id" = i64, Path, description = "Product ID")),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product updated successfully", body = ProductResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Product not found")
    ),
    tag = "Product Management"
)]
pub async fn update_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<ProductRequest>,
) -> ApiResult<ProductResponse> {
    tracing::info!("REST request to update product with ID: {}", id);

    req.validate()
        .map_err(|e| ApiError::bad_request(validation_msg(&e)))?;

    let product = ProductService::update_product(state.db.pool(), id, &req).await?;
    ok(ProductResponse::from(product))
}

/// Delete a product
///
/// DELETE /api/v1/products/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted successfully"),
        (status = 404, description = "Product not found")
    ),
    tag = "Product Management"
)]
pub async fn delete_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<()> {
    tracing::info!("REST request to delete product with ID: {}", id);

    ProductService::delete_product(state.db.pool(), id).await?;
    ok(())
}

/// Search products by name or description
///
/// GET /api/v1/products/search?term=
#[utoipa::path(
    get,
    path = "/api/v1/products/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Search completed successfully", body = [ProductResponse])
    ),
    tag = "Product Management"
)]
pub async fn search_products(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Vec<ProductResponse>> {
    tracing::info!("REST request to search products with term: {}", params.term);

    let products = ProductService::search_products(state.db.pool(), &params.term).await?;
    ok(products.into_iter().map(ProductResponse::from).collect())
}

/// Get products in stock
///
/// GET /api/v1/products/in-stock
#[utoipa::path(
    get,
    path = "/api/v1/products/in-stock",
    responses(
        (status = 200, description = "Successfully retrieved products", body = [ProductResponse])
    ),
    tag = "Product Management"
)]
pub async fn get_products_in_stock(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Vec<ProductResponse>> {
    tracing::info!("REST request to get products in stock");

    let products = ProductService::products_in_stock(state.db.pool()).await?;
    ok(products.into_iter().map(ProductResponse::from).collect())
}
