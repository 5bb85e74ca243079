use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use sg_core::domain::entities::user::User;
use sg_core::errors::DomainError;
use sg_core::repositories::UserDirectory;

/// In-memory UserDirectory
///
/// `create` and `update` enforce the same uniqueness as the MySQL table:
/// email, username and phone.
#[derive(Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    async fn find_by<F>(&self, predicate: F) -> Result<Option<User>, DomainError>
    where
        F: Fn(&User) -> bool + Send,
    {
        let users = self.users.read().await;
        Ok(users.values().find(|u| predicate(u)).cloned())
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.find_by(|u| u.email == email).await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        self.find_by(|u| u.username == username).await
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, DomainError> {
        self.find_by(|u| u.phone == phone).await
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        let taken = users.values().any(|u| {
            u.id == user.id
                || u.email == user.email
                || u.username == user.username
                || u.phone == user.phone
        });
        if taken {
            return Err(DomainError::Validation {
                message: "user already exists".to_string(),
            });
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id) {
            return Err(DomainError::NotFound {
                resource: "user".to_string(),
            });
        }
        let taken = users.values().any(|u| {
            u.id != user.id
                && (u.email == user.email || u.username == user.username || u.phone == user.phone)
        });
        if taken {
            return Err(DomainError::Validation {
                message: "user already exists".to_string(),
            });
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_all_except(&self, email: &str) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        let mut others: Vec<User> = users.values().filter(|u| u.email != email).cloned().collect();
        others.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(others)
    }
}
