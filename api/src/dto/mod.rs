pub mod auth;
pub mod user;

pub use auth::{LoginRequest, LoginResponse, RefreshTokenBody, SignupRequest};
pub use user::{UpdateProfileRequest, UsernameRequest, UsersResponse};
