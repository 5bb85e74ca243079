//! Per-request authorization state machine

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error, warn};

use crate::domain::entities::token::{AccessClaims, RefreshClaims};
use crate::domain::value_objects::session::AuthorizedSession;
use crate::errors::TokenError;
use crate::repositories::{RevocationStore, UserDirectory};
use crate::services::revocation::RevocationList;
use crate::services::token::TokenCodec;

use super::outcome::{GateRejection, GateRequest};

/// Decides whether a request is authenticated
///
/// Each call runs independently: one pass through
/// parse → revocation/expiry check → user lookup, or through the refresh
/// path when the access token is revoked or expired. Nothing is retried.
pub struct AuthorizationGate<S, U>
where
    S: RevocationStore + ?Sized,
    U: UserDirectory + ?Sized,
{
    codec: Arc<TokenCodec>,
    revocations: RevocationList<S>,
    users: Arc<U>,
}

impl<S, U> AuthorizationGate<S, U>
where
    S: RevocationStore + ?Sized,
    U: UserDirectory + ?Sized,
{
    pub fn new(codec: Arc<TokenCodec>, revocations: RevocationList<S>, users: Arc<U>) -> Self {
        Self {
            codec,
            revocations,
            users,
        }
    }

    /// Authorize a request against the current time
    pub async fn authorize(&self, request: GateRequest) -> Result<AuthorizedSession, GateRejection> {
        self.authorize_at(request, Utc::now().timestamp()).await
    }

    /// Authorize a request as if the clock read `now` (Unix seconds)
    pub async fn authorize_at(
        &self,
        request: GateRequest,
        now: i64,
    ) -> Result<AuthorizedSession, GateRejection> {
        let GateRequest {
            access_token,
            refresh_token,
        } = request;

        let access_token = match access_token.filter(|t| !t.is_empty()) {
            Some(token) => token,
            None => {
                debug!("no access token presented");
                return Err(GateRejection::Unauthorized);
            }
        };

        let claims: AccessClaims = self.codec.parse(&access_token).map_err(|e| {
            debug!(error = %e, "access token rejected");
            GateRejection::Unauthorized
        })?;

        let revoked = self.revocations.is_revoked(&access_token).await;
        if let Err(reason) = usability(revoked, claims.is_live_at(now)) {
            debug!(error = %reason, exp = claims.exp, "access token not live, attempting refresh");
            return Err(self.attempt_refresh(&claims, refresh_token.as_deref(), now).await);
        }

        let user = match self.users.find_by_email(&claims.user_email).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                debug!(user_email = %claims.user_email, "token owner not found");
                return Err(GateRejection::UserNotFound);
            }
            Err(e) => {
                error!(error = %e, "user lookup failed");
                return Err(GateRejection::Internal);
            }
        };

        if !user.is_active() {
            debug!(user_email = %claims.user_email, "token owner is inactive");
            return Err(GateRejection::UserInactive);
        }

        Ok(AuthorizedSession {
            user,
            access_token,
            claims,
        })
    }

    /// Refresh path; every outcome is a rejection of the current request
    async fn attempt_refresh(
        &self,
        claims: &AccessClaims,
        refresh_token: Option<&str>,
        now: i64,
    ) -> GateRejection {
        let refresh_token = match refresh_token.filter(|t| !t.is_empty()) {
            Some(token) => token,
            None => {
                debug!("refresh needed but no refresh token supplied");
                return GateRejection::Unauthorized;
            }
        };

        let revoked = match self.revocations.is_revoked_strict(refresh_token).await {
            Ok(revoked) => revoked,
            Err(e) => {
                error!(error = %e, "revocation lookup for refresh token failed");
                return GateRejection::Internal;
            }
        };
        if revoked {
            warn!(error = %TokenError::Revoked, "refresh token rejected");
            return GateRejection::RefreshTokenInvalid;
        }

        let refresh: RefreshClaims = match self.codec.parse(refresh_token) {
            Ok(refresh) => refresh,
            Err(e) => {
                warn!(error = %e, "refresh token rejected");
                return GateRejection::RefreshTokenInvalid;
            }
        };

        if let Err(reason) = usability(false, refresh.is_live_at(now)) {
            warn!(error = %reason, "refresh token rejected");
            return GateRejection::RefreshTokenInvalid;
        }

        if !refresh.has_refresh_marker() {
            warn!(sub = ?refresh.sub, "refresh token marker is missing or wrong");
            return GateRejection::RefreshTokenInvalid;
        }

        match self.codec.issue(&self.codec.renew(claims)) {
            Ok(access_token) => {
                debug!(user_email = %claims.user_email, "access token renewed");
                GateRejection::AccessTokenRenewed { access_token }
            }
            Err(e) => {
                error!(error = %e, "could not sign renewed access token");
                GateRejection::Internal
            }
        }
    }
}

/// Why a well-signed token cannot be used right now, revocation first
pub(super) fn usability(revoked: bool, live: bool) -> Result<(), TokenError> {
    if revoked {
        Err(TokenError::Revoked)
    } else if !live {
        Err(TokenError::Expired)
    } else {
        Ok(())
    }
}
