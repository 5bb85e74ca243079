//! Inputs and rejections of the authorization gate

use thiserror::Error;

/// Credentials presented with a single request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GateRequest {
    /// Bearer token from the `Authorization` header
    pub access_token: Option<String>,

    /// `refresh_token` field of the request body, if any
    pub refresh_token: Option<String>,
}

impl GateRequest {
    pub fn new(access_token: Option<String>, refresh_token: Option<String>) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }

    /// Request carrying only an access token
    pub fn bearer(access_token: impl Into<String>) -> Self {
        Self::new(Some(access_token.into()), None)
    }

    pub fn with_refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.refresh_token = Some(refresh_token.into());
        self
    }
}

/// Why the gate refused a request
///
/// Internal distinctions (bad signature, garbage token, store outage) are
/// logged by the gate and collapsed into these variants. `Display` yields
/// the message returned to clients.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GateRejection {
    /// No usable access token, or a refresh was needed but not offered
    #[error("unauthorized")]
    Unauthorized,

    #[error("refresh token is invalid")]
    RefreshTokenInvalid,

    /// The refresh succeeded; this request is still refused and the client
    /// retries with `access_token`
    #[error("access token is invalid")]
    AccessTokenRenewed { access_token: String },

    #[error("user not found")]
    UserNotFound,

    #[error("user is inactive")]
    UserInactive,

    #[error("internal server error")]
    Internal,
}

impl GateRejection {
    /// Message shown to the client
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// The replacement access token, for `AccessTokenRenewed`
    pub fn renewed_access_token(&self) -> Option<&str> {
        match self {
            GateRejection::AccessTokenRenewed { access_token } => Some(access_token),
            _ => None,
        }
    }
}
