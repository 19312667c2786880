use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub enable_tracing: bool,
    /// PostgreSQL connection URL shared by all services
    pub postgres_url: String,
    pub order_service: ServiceConfig,
    pub product_service: ServiceConfig,
    pub notification_service: ServiceConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn load(env: &str) -> Self {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path)
            .unwrap_or_else(|_| panic!("Failed to read config file: {}", config_path));
        serde_yaml::from_str(&content).expect("Failed to parse config yaml")
    }
}

/// Resolve the config environment name (`APP_ENV`, defaults to `dev`)
pub fn env_name() -> String {
    std::env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string())
}
