use std::sync::Arc;

use crate::db::Database;

/// Shared application state for a service's axum router
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL database handle
    pub db: Arc<Database>,
}

impl AppState {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}
