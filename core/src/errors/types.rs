//! Error types for token handling and session orchestration
//!
//! The `Display` text of `AuthError` is the message shown to clients; the
//! presentation layer forwards it verbatim.

use thiserror::Error;

/// Authentication and session errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("user not found")]
    UserNotFound,

    #[error("user is inactive")]
    UserInactive,

    #[error("username or password incorrect")]
    InvalidCredentials,

    /// Logout was called without a refresh token to revoke
    #[error("unauthorized")]
    MissingRefreshToken,

    #[error("couldn't revoke access token")]
    AccessRevocationFailed,

    #[error("couldn't revoke refresh token")]
    RefreshRevocationFailed,

    /// Signup or a profile edit collided with another account on `field`
    #[error("{field}: already in use")]
    AlreadyInUse { field: String },
}

/// Token encoding and validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Not a JWT, wrong algorithm, or the claims have the wrong shape
    #[error("malformed token")]
    MalformedToken,

    #[error("invalid token signature")]
    InvalidSignature,

    #[error("token signing failed")]
    SigningFailed,

    #[error("token expired")]
    Expired,

    #[error("token revoked")]
    Revoked,
}
