//! Order service entry point

use std::sync::Arc;

use commerce_services::config::{self, AppConfig};
use commerce_services::db::Database;
use commerce_services::logging;
use commerce_services::orders::{self, OrderRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load(&config::env_name());
    let _guard = logging::init_logging(&config);

    tracing::info!("order-service starting (build {})", env!("GIT_HASH"));

    let db = Arc::new(Database::connect(&config.postgres_url).await?);
    OrderRepository::ensure_schema(db.pool()).await?;

    orders::run_server(&config.order_service, db).await
}
