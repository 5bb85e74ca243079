use bcrypt::{hash, verify, DEFAULT_COST};
use tracing::warn;

use sg_core::errors::DomainError;
use sg_core::services::PasswordHasher;

/// bcrypt implementation of PasswordHasher
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self { cost: DEFAULT_COST }
    }
}

impl BcryptPasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a non-default work factor (4..=31)
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        hash(password, self.cost)
            .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))
    }

    fn verify(&self, password: &str, hashed: &str) -> Result<bool, DomainError> {
        match verify(password, hashed) {
            Ok(matches) => Ok(matches),
            Err(e) => {
                // A stored value that is not a bcrypt hash never matches
                warn!("Stored password hash could not be verified: {}", e);
                Ok(false)
            }
        }
    }
}
