use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use sg_core::{NewUser, User};

/// Digits with an optional leading '+'
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9]{7,15}$").unwrap());

pub(crate) fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_REGEX.is_match(phone) {
        Ok(())
    } else {
        Err(ValidationError::new("phone"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 3, max = 32))]
    pub username: String,

    #[validate(length(min = 1, max = 64))]
    pub first_name: String,

    #[validate(length(min = 1, max = 64))]
    pub last_name: String,

    #[validate(custom(function = "validate_phone"))]
    pub phone: String,

    #[validate(length(min = 6, max = 72))]
    pub password: String,
}

impl From<SignupRequest> for NewUser {
    fn from(request: SignupRequest) -> Self {
        NewUser {
            email: request.email,
            username: request.username,
            first_name: request.first_name,
            last_name: request.last_name,
            phone: request.phone,
            password: request.password,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Body carried by guarded requests that may need a refresh, and by logout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RefreshTokenBody {
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
}

/// Render validator failures as one line per field and rule
pub fn validation_messages(errors: &validator::ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter()
                .map(move |e| format!("validation failed on field '{}', condition: {}", field, e.code))
        })
        .collect();
    messages.sort();
    messages
}
