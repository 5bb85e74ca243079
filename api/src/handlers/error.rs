use actix_web::{http::StatusCode, HttpResponse};
use serde_json::json;
use tracing::error;

use sg_core::{AuthError, DomainError, GateRejection};

use super::response::{error_envelope, respond};

const INTERNAL: &str = "internal server error";

/// Convert a session-service error into an enveloped response
pub fn handle_domain_error(err: &DomainError) -> HttpResponse {
    match err {
        DomainError::Auth(auth) => handle_auth_error(auth),
        DomainError::Validation { message } => {
            error_envelope(StatusCode::BAD_REQUEST, "", vec![message.clone()])
        }
        DomainError::NotFound { resource } => error_envelope(
            StatusCode::NOT_FOUND,
            "",
            vec![format!("{} not found", resource)],
        ),
        DomainError::Store { .. } | DomainError::Internal { .. } | DomainError::Token(_) => {
            error!(error = %err, "request failed");
            error_envelope(StatusCode::INTERNAL_SERVER_ERROR, "", vec![INTERNAL.to_string()])
        }
    }
}

fn handle_auth_error(err: &AuthError) -> HttpResponse {
    let status = match err {
        // Only login produces these
        AuthError::UserNotFound | AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        AuthError::UserInactive
        | AuthError::MissingRefreshToken
        | AuthError::AlreadyInUse { .. } => StatusCode::BAD_REQUEST,
        AuthError::AccessRevocationFailed | AuthError::RefreshRevocationFailed => {
            return error_envelope(
                StatusCode::INTERNAL_SERVER_ERROR,
                "logout failed",
                vec![err.to_string()],
            );
        }
    };
    error_envelope(status, "", vec![err.to_string()])
}

/// Convert a gate rejection into the response that ends the request
pub fn handle_rejection(rejection: &GateRejection) -> HttpResponse {
    match rejection {
        GateRejection::AccessTokenRenewed { access_token } => respond(
            StatusCode::UNAUTHORIZED,
            "new access token generated",
            Some(json!({ "access_token": access_token })),
            vec![rejection.message()],
        ),
        GateRejection::Unauthorized | GateRejection::RefreshTokenInvalid => {
            error_envelope(StatusCode::UNAUTHORIZED, "", vec![rejection.message()])
        }
        GateRejection::UserNotFound => {
            error_envelope(StatusCode::NOT_FOUND, "", vec![rejection.message()])
        }
        GateRejection::UserInactive => {
            error_envelope(StatusCode::BAD_REQUEST, "", vec![rejection.message()])
        }
        GateRejection::Internal => error_envelope(
            StatusCode::INTERNAL_SERVER_ERROR,
            "",
            vec![rejection.message()],
        ),
    }
}
