//! Shared configuration and common types for SessionGate
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types loaded once at startup
//! - The JSON response envelope returned by every endpoint

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CacheConfig, CleanupConfig, DatabaseConfig, Environment, JwtConfig,
    LogFormat, LoggingConfig, RevocationBackend, RevocationConfig, ServerConfig,
};
pub use types::{ApiResponse, HealthResponse, HealthStatus};
