//! MySQL implementation of the UserDirectory trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sg_core::domain::entities::user::{User, UserStatus};
use sg_core::errors::DomainError;
use sg_core::repositories::UserDirectory;

const SELECT_COLUMNS: &str = "SELECT id, email, username, first_name, last_name, phone, image, \
     status, password_hash, created_at, updated_at FROM users";

/// MySQL implementation of UserDirectory
pub struct MySqlUserDirectory {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserDirectory {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Fetch the single user matching `column = value`
    ///
    /// `column` is always one of the fixed names used below, never input.
    async fn find_one(&self, column: &'static str, value: &str) -> Result<Option<User>, DomainError> {
        let query = format!("{} WHERE {} = ? LIMIT 1", SELECT_COLUMNS, column);

        let row = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::store(format!("Failed to find user by {}: {}", column, e)))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    /// Convert database row to User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row.try_get("id").map_err(column_error)?;
        let status: String = row.try_get("status").map_err(column_error)?;

        Ok(User {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid user UUID: {}", e)))?,
            email: row.try_get("email").map_err(column_error)?,
            username: row.try_get("username").map_err(column_error)?,
            first_name: row.try_get("first_name").map_err(column_error)?,
            last_name: row.try_get("last_name").map_err(column_error)?,
            phone: row.try_get("phone").map_err(column_error)?,
            image: row.try_get("image").map_err(column_error)?,
            status: status.parse::<UserStatus>().map_err(DomainError::internal)?,
            password_hash: row.try_get("password_hash").map_err(column_error)?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(column_error)?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(column_error)?,
        })
    }
}

fn column_error(e: sqlx::Error) -> DomainError {
    DomainError::internal(format!("Failed to read user column: {}", e))
}

#[async_trait]
impl UserDirectory for MySqlUserDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.find_one("email", email).await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        self.find_one("username", username).await
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, DomainError> {
        self.find_one("phone", phone).await
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                id, email, username, first_name, last_name, phone, image,
                status, password_hash, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.email)
            .bind(&user.username)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.phone)
            .bind(&user.image)
            .bind(user.status.as_str())
            .bind(&user.password_hash)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                // Lost a race with a concurrent signup
                sqlx::Error::Database(ref db) if db.is_unique_violation() => DomainError::Validation {
                    message: "user already exists".to_string(),
                },
                e => DomainError::store(format!("Failed to create user: {}", e)),
            })?;

        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users
            SET first_name = ?, last_name = ?, phone = ?, image = ?, status = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.phone)
            .bind(&user.image)
            .bind(user.status.as_str())
            .bind(user.updated_at)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.is_unique_violation() => DomainError::Validation {
                    message: "user already exists".to_string(),
                },
                e => DomainError::store(format!("Failed to update user: {}", e)),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "user".to_string(),
            });
        }

        Ok(user)
    }

    async fn find_all_except(&self, email: &str) -> Result<Vec<User>, DomainError> {
        let query = format!("{} WHERE email <> ? ORDER BY created_at", SELECT_COLUMNS);

        let rows = sqlx::query(&query)
            .bind(email)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::store(format!("Failed to list users: {}", e)))?;

        rows.iter().map(Self::row_to_user).collect()
    }
}
