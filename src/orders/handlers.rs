//! Order REST handlers

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::{ApiError, ApiResult, AppState, created, ok, validation_msg};

use super::lifecycle::OrderStatus;
use super::models::{OrderRequest, OrderResponse, OrderStatusUpdateRequest};
use super::service::OrderService;

/// Create a new order
///
/// POST /api/v1/orders
#[utoipa::path(
    post,
    path = "/api/v1/orders",
    request_body = OrderRequest,
    responses(
        (status = 201, description = "Order created successfully", body = OrderResponse),
        (status = 400, description = "Invalid input")
    ),
    tag = "Order Management"
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    Json(req): Json<OrderRequest>,
) -> ApiResult<OrderResponse> {
    tracing::info!("REST request to create order for customer: {}", req.customer_id);

    req.validate()
        .map_err(|e| ApiError::bad_request(validation_msg(&e)))?;

    let order = OrderService::create_order(state.db.pool(), &req).await?;
    created(OrderResponse::from(order))
}

/// Get order by ID
///
/// GET /api/v1/orders/{id}
#[utoipa::path(
    get,
    path = "/api/v1/orders/{id}",
    params(("id" = i64, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 404, description = "Order not found")
    ),
    tag = "Order Management"
)]
pub async fn get_order_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<OrderResponse> {
    tracing::info!("REST request to get order with ID: {}", id);

    let order = OrderService::get_order(state.db.pool(), id).await?;
    ok(OrderResponse::from(order))
}

/// Get all orders
///
/// GET /api/v1/orders
#[utoipa::path(
    get,
    path = "/api/v1/orders",
    responses(
        (status = 200, description = "Successfully retrieved list", body = [OrderResponse])
    ),
    tag = "Order Management"
)]
pub async fn get_all_orders(State(state): State<Arc<AppState>>) -> ApiResult<Vec<OrderResponse>> {
    tracing::info!("REST request to get all orders");

    let orders = OrderService::list_orders(state.db.pool()).await?;
    ok(orders.into_iter().map(OrderResponse::from).collect())
}

/// Update an existing order (structural fields)
///
/// PUT /api/v1/orders/{id}
#[utoipa::path(
    put,
    path = "/api/v1/orders/{id}",
    params(("id" = i64, Path, description = "Order ID")),
    request_body = OrderRequest,
    responses(
        (status = 200, description = "Order updated successfully", body = OrderResponse),
        (status = 400, description = "Invalid input or order cannot be updated"),
        (status = 404, description = "Order not found")
    ),
    tag = "Order Management"
)]
pub async fn update_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<OrderRequest>,
) -> ApiResult<OrderResponse> {
    tracing::info!("REST request to update order with ID: {}", id);

    req.validate()
        .map_err(|e| ApiError::bad_request(validation_msg(&e)))?;

    let order = OrderService::update_order(state.db.pool(), id, &req).await?;
    ok(OrderResponse::from(order))
}

/// Cancel an order
///
/// DELETE /api/v1/orders/{id} -- a status transition, not a record removal
#[utoipa::path(
    delete,
    path = "/api/v1/orders/{id}",
    params(("id" = i64, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order cancelled successfully"),
        (status = 400, description = "Order cannot be cancelled"),
        (status = 404, description = "Order not found")
    ),
    tag = "Order Management"
)]
pub async fn cancel_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<()> {
    tracing::info!("REST request to cancel order with ID: {}", id);

    OrderService::cancel_order(state.db.pool(), id).await?;
    ok(())
}

/// Update the status of an order
///
/// PATCH /api/v1/orders/{id}/status
#[utoipa::path(
    patch,
    path = "/api/v1/orders/{id}/status",
    params(("id" = i64, Path, description = "Order ID")),
    request_body = OrderStatusUpdateRequest,
    responses(
        (status = 200, description = "Order status updated successfully", body = OrderResponse),
        (status = 400, description = "Invalid status transition"),
        (status = 404, description = "Order not found")
    ),
    tag = "Order Management"
)]
pub async fn update_order_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<OrderStatusUpdateRequest>,
) -> ApiResult<OrderResponse> {
    tracing::info!(
        "REST request to update status for order ID: {} to {}",
        id,
        req.status
    );

    let order = OrderService::update_order_status(state.db.pool(), id, req.status).await?;
    ok(OrderResponse::from(order))
}

/// Get orders for a specific customer
///
/// GET /api/v1/orders/customer/{customer_id}
#[utoipa::path(
    get,
    path = "/api/v1/orders/customer/{customer_id}",
    params(("customer_id" = String, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Successfully retrieved orders", body = [OrderResponse])
    ),
    tag = "Order Management"
)]
pub async fn get_orders_by_customer(
    State(state): State<Arc<AppState>>,
    Path(customer_id): Path<String>,
) -> ApiResult<Vec<OrderResponse>> {
    tracing::info!("REST request to get orders for customer: {}", customer_id);

    let orders = OrderService::orders_by_customer(state.db.pool(), &customer_id).await?;
    ok(orders.into_iter().map(OrderResponse::from).collect())
}

/// Get orders with a specific status
///
/// GET /api/v1/orders/status/{status}
#[utoipa::path(
    get,
    path = "/api/v1/orders/status/{status}",
    params(("status" = String, Path, description = "Order status (e.g. PENDING)")),
    responses(
        (status = 200, description = "Successfully retrieved orders", body = [OrderResponse]),
        (status = 400, description = "Unknown status value")
    ),
    tag = "Order Management"
)]
pub async fn get_orders_by_status(
    State(state): State<Arc<AppState>>,
    Path(status): Path<String>,
) -> ApiResult<Vec<OrderResponse>> {
    tracing::info!("REST request to get orders with status: {}", status);

    let status: OrderStatus = status
        .parse()
        .map_err(|e: super::lifecycle::ParseStatusError| ApiError::bad_request(e.to_string()))?;

    let orders = OrderService::orders_by_status(state.db.pool(), status).await?;
    ok(orders.into_iter().map(OrderResponse::from).collect())
}

/// Get recent orders sorted by date
///
/// GET /api/v1/orders/recent
#[utoipa::path(
    get,
    path = "/api/v1/orders/recent",
    responses(
        (status = 200, description = "Successfully retrieved orders", body = [OrderResponse])
    ),
    tag = "Order Management"
)]
pub async fn get_recent_orders(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Vec<OrderResponse>> {
    tracing::info!("REST request to get recent orders");

    let orders = OrderService::recent_orders(state.db.pool()).await?;
    ok(orders.into_iter().map(OrderResponse::from).collect())
}
