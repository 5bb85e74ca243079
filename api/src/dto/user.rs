use serde::{Deserialize, Serialize};
use validator::Validate;

use sg_core::{ProfileUpdate, UserProfile};

use super::auth::validate_phone;

/// Body of PUT /api/v1/me
///
/// Email and username are not editable and are ignored if sent.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 64))]
    pub first_name: String,

    #[validate(length(min = 1, max = 64))]
    pub last_name: String,

    #[validate(custom(function = "validate_phone"))]
    pub phone: String,

    #[validate(url)]
    #[serde(default)]
    pub image: Option<String>,
}

impl From<UpdateProfileRequest> for ProfileUpdate {
    fn from(request: UpdateProfileRequest) -> Self {
        ProfileUpdate {
            first_name: request.first_name,
            last_name: request.last_name,
            phone: request.phone,
            image: request.image,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UsernameRequest {
    #[validate(length(min = 1))]
    pub username: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UsersResponse {
    pub users: Vec<UserProfile>,
}
