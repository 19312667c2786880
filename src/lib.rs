//! E-commerce microservices: orders, products, notifications
//!
//! Three independent axum services sharing one crate's plumbing. Each binary
//! under `src/bin/` runs exactly one service.
//!
//! # Modules
//!
//! - [`orders`] - order CRUD plus the order lifecycle rules (status
//!   transition table, derived totals, mutation guards)
//! - [`products`] - product catalog CRUD, search, in-stock listing
//! - [`notifications`] - notification records with recipient/order lookups
//! - [`api`] - shared response envelope, error type, health endpoint
//! - [`config`] - YAML application config
//! - [`db`] - PostgreSQL pool management
//! - [`logging`] - tracing setup with rolling file output

pub mod api;
pub mod config;
pub mod db;
pub mod logging;
pub mod notifications;
pub mod orders;
pub mod products;

// Convenient re-exports at crate root
pub use api::{ApiError, ApiResponse, ApiResult};
pub use config::{AppConfig, ServiceConfig};
pub use db::Database;
pub use orders::{
    MutationError, Order, OrderStatus, TransitionError, compute_total, guard_cancel,
    guard_structural_mutation, validate_transition,
};
