//! HS256 token codec

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use sg_shared::config::JwtConfig;

use crate::domain::entities::token::{AccessClaims, RefreshClaims, TokenPair};
use crate::errors::TokenError;

/// Signs and verifies tokens with the process-wide secret
///
/// Built once from [`JwtConfig`] at startup and shared behind an `Arc`.
/// Parsing checks the signature and the claim shape only; expiry is a
/// decision for the caller.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_token_expiry: i64,
    refresh_token_expiry: i64,
}

impl TokenCodec {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_aud = false;

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            access_token_expiry: config.access_token_expiry,
            refresh_token_expiry: config.refresh_token_expiry,
        }
    }

    /// Encode and sign a claim set
    pub fn issue<C: Serialize>(&self, claims: &C) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|_| TokenError::SigningFailed)
    }

    /// Verify the signature of `token` and decode its claims
    ///
    /// # Returns
    /// * `Ok(C)` - Claims, possibly expired
    /// * `Err(TokenError::InvalidSignature)` - Signed with another secret
    /// * `Err(TokenError::MalformedToken)` - Anything else, including claims
    ///   that do not fit `C`
    pub fn parse<C: DeserializeOwned>(&self, token: &str) -> Result<C, TokenError> {
        decode::<C>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                kind => {
                    debug!(?kind, "token rejected as malformed");
                    TokenError::MalformedToken
                }
            })
    }

    /// Fresh access claims for `user_email`
    pub fn access_claims(&self, user_email: &str) -> AccessClaims {
        AccessClaims::new(user_email, self.access_expiry_from_now())
    }

    /// Fresh, marked refresh claims
    pub fn refresh_claims(&self) -> RefreshClaims {
        RefreshClaims::new(Utc::now().timestamp() + self.refresh_token_expiry)
    }

    /// Copy of `claims` with the expiry moved one access lifetime ahead
    pub fn renew(&self, claims: &AccessClaims) -> AccessClaims {
        AccessClaims {
            exp: self.access_expiry_from_now(),
            ..claims.clone()
        }
    }

    /// Issue the access and refresh token handed out on login
    pub fn issue_pair(&self, user_email: &str) -> Result<TokenPair, TokenError> {
        let access_token = self.issue(&self.access_claims(user_email))?;
        let refresh_token = self.issue(&self.refresh_claims())?;

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.access_token_expiry,
            self.refresh_token_expiry,
        ))
    }

    pub fn access_token_expiry(&self) -> i64 {
        self.access_token_expiry
    }

    pub fn refresh_token_expiry(&self) -> i64 {
        self.refresh_token_expiry
    }

    fn access_expiry_from_now(&self) -> i64 {
        Utc::now().timestamp() + self.access_token_expiry
    }
}
