//! Table definitions, created at startup when `DATABASE_ENSURE_SCHEMA` is on

use sqlx::MySqlPool;
use tracing::info;

use crate::InfrastructureError;

const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id CHAR(36) NOT NULL PRIMARY KEY,
        email VARCHAR(255) NOT NULL,
        username VARCHAR(64) NOT NULL,
        first_name VARCHAR(100) NOT NULL,
        last_name VARCHAR(100) NOT NULL,
        phone VARCHAR(32) NOT NULL,
        image VARCHAR(512) NULL,
        status VARCHAR(16) NOT NULL DEFAULT 'active',
        password_hash VARCHAR(255) NOT NULL,
        created_at DATETIME NOT NULL,
        updated_at DATETIME NOT NULL,
        UNIQUE KEY uq_users_email (email),
        UNIQUE KEY uq_users_username (username),
        UNIQUE KEY uq_users_phone (phone)
    )
"#;

const CREATE_REVOKED_TOKENS: &str = r#"
    CREATE TABLE IF NOT EXISTS revoked_tokens (
        token_hash CHAR(64) NOT NULL PRIMARY KEY,
        owner_email VARCHAR(255) NOT NULL,
        revoked_at DATETIME NOT NULL,
        expires_at DATETIME NULL,
        INDEX idx_revoked_tokens_expires_at (expires_at)
    )
"#;

/// Create the tables this service needs if they are missing
pub async fn ensure_schema(pool: &MySqlPool) -> Result<(), InfrastructureError> {
    for statement in [CREATE_USERS, CREATE_REVOKED_TOKENS] {
        sqlx::query(statement).execute(pool).await?;
    }
    info!("Database schema verified");
    Ok(())
}
