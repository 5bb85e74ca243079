//! MySQL connection pool

use std::time::Duration;

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::{error, info};

use sg_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// Open a connection pool using `config`
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, InfrastructureError> {
    if !config.url.starts_with("mysql://") {
        return Err(InfrastructureError::Config(
            "DATABASE_URL must start with mysql://".to_string(),
        ));
    }

    info!(max_connections = config.max_connections, "Connecting to MySQL");

    MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(config.idle_timeout))
        .connect(&config.url)
        .await
        .map_err(|e| {
            error!("Failed to connect to MySQL: {}", e);
            InfrastructureError::Database(e)
        })
}
