//! Mock implementation of UserDirectory for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::r#trait::UserDirectory;

/// Mock user directory for testing
pub struct MockUserDirectory {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
    should_fail: AtomicBool,
}

impl MockUserDirectory {
    /// Create a new empty directory
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            should_fail: AtomicBool::new(false),
        }
    }

    /// Create a directory seeded with users
    pub async fn with_users(users: Vec<User>) -> Self {
        let directory = Self::new();
        {
            let mut map = directory.users.write().await;
            for user in users {
                map.insert(user.id, user);
            }
        }
        directory
    }

    /// Make every call fail with a store error
    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::store("mock directory failure"));
        }
        Ok(())
    }

    async fn find_by<F>(&self, predicate: F) -> Result<Option<User>, DomainError>
    where
        F: Fn(&User) -> bool,
    {
        self.check_failure()?;
        let users = self.users.read().await;
        Ok(users.values().find(|u| predicate(u)).cloned())
    }
}

impl Default for MockUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserDirectory for MockUserDirectory {
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
        self.check_failure()?;
        let mut users = self.users.write().await;
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        self.check_failure()?;
        let mut users = self.users.write().await;
        match users.get_mut(&user.id) {
            Some(existing) => {
                *existing = user.clone();
                Ok(user)
            }
            None => Err(DomainError::NotFound {
                resource: "user".to_string(),
            }),
        }
    }

    async fn find_all_except(&self, email: &str) -> Result<Vec<User>, DomainError> {
        self.check_failure()?;
        let users = self.users.read().await;
        Ok(users.values().filter(|u| u.email != email).cloned().collect())
    }
}
