//! Database module - MySQL implementations using SQLx
//!
//! - Connection pool creation
//! - Schema bootstrap for the `users` and `revoked_tokens` tables
//! - Revocation store and user directory implementations

pub mod connection;
pub mod mysql;
pub mod schema;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::create_pool;
pub use mysql::{MySqlRevocationStore, MySqlUserDirectory};
pub use schema::ensure_schema;
