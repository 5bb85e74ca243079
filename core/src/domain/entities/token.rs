//! Token claim sets for JWT-based sessions.
//!
//! Access and refresh tokens are told apart by their claims, not by a type
//! header: an access token names its owner through `user_email`, a refresh
//! token carries no identity and is marked with `sub = 1`.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Value of the `sub` claim every refresh token is issued with
pub const REFRESH_TOKEN_MARKER: i64 = 1;

/// Claims carried by an access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Email of the user the token was issued to
    pub user_email: String,

    /// Expiration timestamp (seconds since the Unix epoch)
    pub exp: i64,
}

impl AccessClaims {
    /// Creates access claims expiring at `exp`
    pub fn new(user_email: impl Into<String>, exp: i64) -> Self {
        Self {
            user_email: user_email.into(),
            exp,
        }
    }

    /// A token is live while its expiry lies strictly in the future
    pub fn is_live_at(&self, now: i64) -> bool {
        self.exp > now
    }

    /// Expiry as a timestamp, `None` if out of range
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }
}

/// Claims carried by a refresh token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshClaims {
    /// Expiration timestamp (seconds since the Unix epoch)
    pub exp: i64,

    /// Refresh marker, must equal [`REFRESH_TOKEN_MARKER`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<i64>,
}

impl RefreshClaims {
    /// Creates marked refresh claims expiring at `exp`
    pub fn new(exp: i64) -> Self {
        Self {
            exp,
            sub: Some(REFRESH_TOKEN_MARKER),
        }
    }

    pub fn is_live_at(&self, now: i64) -> bool {
        self.exp > now
    }

    /// Whether the `sub` claim identifies this as a refresh token
    ///
    /// An absent marker does not qualify.
    pub fn has_refresh_marker(&self) -> bool {
        self.sub == Some(REFRESH_TOKEN_MARKER)
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }
}

/// Token pair handed out on login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,

    /// Access token lifetime in seconds
    pub access_expires_in: i64,

    /// Refresh token lifetime in seconds
    pub refresh_expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(
        access_token: String,
        refresh_token: String,
        access_expires_in: i64,
        refresh_expires_in: i64,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            access_expires_in,
            refresh_expires_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_claims_liveness_is_strict() {
        let claims = AccessClaims::new("ada@example.com", 1_000);
        assert!(claims.is_live_at(999));
        assert!(!claims.is_live_at(1_000));
        assert!(!claims.is_live_at(1_001));
    }

    #[test]
    fn test_refresh_marker() {
        assert!(RefreshClaims::new(10).has_refresh_marker());

        let wrong = RefreshClaims { exp: 10, sub: Some(2) };
        assert!(!wrong.has_refresh_marker());

        let absent = RefreshClaims { exp: 10, sub: None };
        assert!(!absent.has_refresh_marker());
    }

    #[test]
    fn test_refresh_claims_without_sub_deserialize() {
        let claims: RefreshClaims = serde_json::from_str(r#"{"exp": 42}"#).unwrap();
        assert_eq!(claims.sub, None);
        assert_eq!(claims.exp, 42);
    }

    #[test]
    fn test_access_claims_wire_shape() {
        let claims = AccessClaims::new("ada@example.com", 42);
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json, serde_json::json!({ "user_email": "ada@example.com", "exp": 42 }));
    }

    #[test]
    fn test_expires_at() {
        let claims = AccessClaims::new("ada@example.com", 0);
        assert_eq!(claims.expires_at().unwrap().timestamp(), 0);
    }
}
