//! Redis connection setup with retry

use redis::{aio::MultiplexedConnection, Client};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use sg_shared::config::CacheConfig;

use crate::InfrastructureError;

/// Open a multiplexed connection, retrying with exponential backoff
///
/// # Arguments
/// * `config` - Cache configuration settings
/// * `max_retries` - Maximum number of connection attempts
/// * `retry_delay_ms` - Delay before the second attempt, doubled after each failure
pub async fn connect_with_retry(
    config: &CacheConfig,
    max_retries: u32,
    retry_delay_ms: u64,
) -> Result<MultiplexedConnection, InfrastructureError> {
    info!("Connecting to Redis at {}", mask_url(&config.url));

    let client = Client::open(config.url.as_str()).map_err(|e| {
        error!("Failed to parse Redis URL: {}", e);
        InfrastructureError::Config(format!("Invalid Redis URL: {}", e))
    })?;

    let mut attempts = 0;
    let mut delay = retry_delay_ms;

    loop {
        attempts += 1;
        debug!("Attempting to connect to Redis (attempt {})", attempts);

        match client.get_multiplexed_async_connection().await {
            Ok(connection) => {
                info!("Successfully connected to Redis");
                return Ok(connection);
            }
            Err(e) if attempts < max_retries => {
                warn!(
                    "Failed to connect to Redis (attempt {}/{}): {}. Retrying in {}ms...",
                    attempts, max_retries, e, delay
                );
                sleep(Duration::from_millis(delay)).await;
                // Exponential backoff with cap at 5 seconds
                delay = (delay * 2).min(5000);
            }
            Err(e) => {
                error!("Failed to connect to Redis after {} attempts: {}", attempts, e);
                return Err(InfrastructureError::Cache(e));
            }
        }
    }
}

/// Hide credentials in a Redis URL before logging it
pub(crate) fn mask_url(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}***{}", &url[..scheme_end + 3], &url[at..])
        }
        _ => url.to_string(),
    }
}
