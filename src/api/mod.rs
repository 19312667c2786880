//! Shared HTTP API plumbing
//!
//! - [`ApiResponse<T>`]: Unified response envelope
//! - [`ApiError`] / [`ApiResult`]: Handler error type and result alias
//! - [`AppState`]: Per-service shared state (database handle)
//! - [`health_check`]: Common health endpoint

pub mod health;
pub mod response;
pub mod state;

pub use health::{HealthResponse, health_check};
pub use response::{ApiError, ApiResponse, ApiResult, created, error_codes, ok, validation_msg};
pub use state::AppState;
