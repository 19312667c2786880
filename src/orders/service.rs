//! Order service - business logic for order operations
//!
//! Pulls the current snapshot from the repository, applies the lifecycle
//! rules, and persists the result. All status decisions live in
//! [`super::lifecycle`]; this layer only orchestrates.

use sqlx::PgPool;

use super::error::OrderError;
use super::lifecycle::{self, OrderStatus};
use super::models::{Order, OrderRequest};
use super::repository::OrderRepository;

pub struct OrderService;

impl OrderService {
    /// Create a new order in PENDING status with a derived total
    pub async fn create_order(pool: &PgPool, req: &OrderRequest) -> Result<Order, OrderError> {
        tracing::info!("Creating new order for customer: {}", req.customer_id);

        let total = lifecycle::compute_total(req.quantity, req.unit_price);
        let order = OrderRepository::create(
            pool,
            &req.customer_id,
            req.product_id,
            &req.product_name,
            req.quantity,
            req.unit_price,
            total,
            OrderStatus::Pending,
        )
        .await?;

        tracing::info!("Order created successfully with ID: {}", order.id);
        Ok(order)
    }

    pub async fn get_order(pool: &PgPool, id: i64) -> Result<Order, OrderError> {
        tracing::info!("Fetching order with ID: {}", id);

        OrderRepository::get_by_id(pool, id)
            .await?
            .ok_or(OrderError::NotFound(id))
    }

    pub async fn list_orders(pool: &PgPool) -> Result<Vec<Order>, OrderError> {
        tracing::info!("Fetching all orders");

        Ok(OrderRepository::list_all(pool).await?)
    }

    /// Full structural update; forbidden once the order has shipped.
    ///
    /// The total is recomputed from the new quantity and unit price; any
    /// caller-supplied total is ignored. The status is left untouched.
    pub async fn update_order(
        pool: &PgPool,
        id: i64,
        req: &OrderRequest,
    ) -> Result<Order, OrderError> {
        tracing::info!("Updating order with ID: {}", id);

        let order = Self::get_order(pool, id).await?;
        lifecycle::guard_structural_mutation(order.status)?;

        let total = lifecycle::compute_total(req.quantity, req.unit_price);
        let updated = OrderRepository::update_structural(
            pool,
            id,
            &req.customer_id,
            req.product_id,
            &req.product_name,
            req.quantity,
            req.unit_price,
            total,
        )
        .await?
        .ok_or(OrderError::NotFound(id))?;

        tracing::info!("Order updated successfully with ID: {}", updated.id);
        Ok(updated)
    }

    /// Cancel an order: a status write to CANCELLED, never a row removal.
    ///
    /// Goes through [`lifecycle::guard_cancel`], not the transition table, so
    /// a SHIPPED order can still be cancelled here.
    pub async fn cancel_order(pool: &PgPool, id: i64) -> Result<Order, OrderError> {
        tracing::info!("Cancelling order with ID: {}", id);

        let order = Self::get_order(pool, id).await?;
        lifecycle::guard_cancel(order.status)?;

        let cancelled = OrderRepository::update_status(pool, id, OrderStatus::Cancelled)
            .await?
            .ok_or(OrderError::NotFound(id))?;

        tracing::info!("Order cancelled successfully with ID: {}", id);
        Ok(cancelled)
    }

    /// Status update on the general path, validated against the transition table
    pub async fn update_order_status(
        pool: &PgPool,
        id: i64,
        requested: OrderStatus,
    ) -> Result<Order, OrderError> {
        tracing::info!("Updating status for order ID: {} to {}", id, requested);

        let order = Self::get_order(pool, id).await?;
        lifecycle::validate_transition(order.status, requested)?;

        let updated = OrderRepository::update_status(pool, id, requested)
            .await?
            .ok_or(OrderError::NotFound(id))?;

        tracing::info!("Order status updated successfully for ID: {}", id);
        Ok(updated)
    }

    pub async fn orders_by_customer(
        pool: &PgPool,
        customer_id: &str,
    ) -> Result<Vec<Order>, OrderError> {
        tracing::info!("Fetching orders for customer: {}", customer_id);

        Ok(OrderRepository::find_by_customer(pool, customer_id).await?)
    }

    pub async fn orders_by_status(
        pool: &PgPool,
        status: OrderStatus,
    ) -> Result<Vec<Order>, OrderError> {
        tracing::info!("Fetching orders with status: {}", status);

        Ok(OrderRepository::find_by_status(pool, status).await?)
    }

    pub async fn recent_orders(pool: &PgPool) -> Result<Vec<Order>, OrderError> {
        tracing::info!("Fetching recent orders");

        Ok(OrderRepository::find_recent(pool).await?)
    }
}
