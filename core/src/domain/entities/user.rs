//! User entity representing a registered account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    /// Storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }
}

impl std::str::FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(UserStatus::Active),
            "inactive" => Ok(UserStatus::Inactive),
            other => Err(format!("unknown user status: {}", other)),
        }
    }
}

/// Registered user as held by the user directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    pub email: String,

    pub username: String,

    pub first_name: String,

    pub last_name: String,

    pub phone: String,

    /// Profile picture URL
    pub image: Option<String>,

    pub status: UserStatus,

    /// bcrypt hash of the password, never serialized
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates an active user from a signup request and a password hash
    pub fn new(new_user: NewUser, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email: new_user.email,
            username: new_user.username,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            phone: new_user.phone,
            image: None,
            status: UserStatus::Active,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    /// Marks the account inactive
    pub fn deactivate(&mut self) {
        self.status = UserStatus::Inactive;
        self.updated_at = Utc::now();
    }

    /// Replace the editable profile fields
    ///
    /// Email, username, status and password are untouched.
    pub fn apply_update(&mut self, update: ProfileUpdate) {
        self.first_name = update.first_name;
        self.last_name = update.last_name;
        self.phone = update.phone;
        self.image = update.image;
        self.updated_at = Utc::now();
    }

    /// Public projection safe to return to clients
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            email: self.email.clone(),
            username: self.username.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phone: self.phone.clone(),
            image: self.image.clone(),
        }
    }
}

/// Public fields of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub image: Option<String>,
}

/// Fields a user may change on their own account
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub image: Option<String>,
}

/// Signup input, password still in plain text
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub password: String,
}
