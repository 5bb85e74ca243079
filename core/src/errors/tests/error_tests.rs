//! Unit tests for domain error types

use crate::errors::{AuthError, DomainError, TokenError};

#[test]
fn test_auth_error_client_messages() {
    assert_eq!(AuthError::UserNotFound.to_string(), "user not found");
    assert_eq!(AuthError::UserInactive.to_string(), "user is inactive");
    assert_eq!(
        AuthError::InvalidCredentials.to_string(),
        "username or password incorrect"
    );
    assert_eq!(AuthError::MissingRefreshToken.to_string(), "unauthorized");
    assert_eq!(
        AuthError::AccessRevocationFailed.to_string(),
        "couldn't revoke access token"
    );
    assert_eq!(
        AuthError::RefreshRevocationFailed.to_string(),
        "couldn't revoke refresh token"
    );
}

#[test]
fn test_already_in_use_names_field() {
    let error = AuthError::AlreadyInUse {
        field: "username".to_string(),
    };
    assert_eq!(error.to_string(), "username: already in use");
}

#[test]
fn test_bridges_are_transparent() {
    let error: DomainError = TokenError::InvalidSignature.into();
    assert_eq!(error.to_string(), "invalid token signature");
    assert!(matches!(error, DomainError::Token(TokenError::InvalidSignature)));

    let error: DomainError = AuthError::UserInactive.into();
    assert_eq!(error.to_string(), "user is inactive");
}

#[test]
fn test_store_shorthand() {
    let error = DomainError::store("connection refused");
    assert!(matches!(error, DomainError::Store { .. }));
    assert!(error.to_string().contains("connection refused"));
}
