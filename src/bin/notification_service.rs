//! Notification service entry point

use std::sync::Arc;

use commerce_services::config::{self, AppConfig};
use commerce_services::db::Database;
use commerce_services::logging;
use commerce_services::notifications::{self, NotificationRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load(&config::env_name());
    let _guard = logging::init_logging(&config);

    tracing::info!("notification-service starting (build {})", env!("GIT_HASH"));

    let db = Arc::new(Database::connect(&config.postgres_url).await?);
    NotificationRepository::ensure_schema(db.pool()).await?;

    notifications::run_server(&config.notification_service, db).await
}
