use actix_web::{http::StatusCode, web, HttpResponse};

use sg_core::{RevocationStore, UserDirectory};

use crate::app::AppState;
use crate::dto::RefreshTokenBody;
use crate::handlers::{envelope, handle_domain_error};
use crate::middleware::Authenticated;

/// Handler for POST /api/v1/auth/logout
///
/// Revokes the presented access token and the `refresh_token` from the
/// body. Requires the session guard.
///
/// ## Errors
/// - 400 Bad Request: no refresh token in the body
/// - 500 Internal Server Error: `"couldn't revoke access token"` or
///   `"couldn't revoke refresh token"`, message `"logout failed"`
pub async fn logout<R, U>(
    state: web::Data<AppState<R, U>>,
    auth: Authenticated,
    body: Option<web::Json<RefreshTokenBody>>,
) -> HttpResponse
where
    R: RevocationStore + ?Sized + 'static,
    U: UserDirectory + ?Sized + 'static,
{
    let refresh_token = body.and_then(|b| b.into_inner().refresh_token);

    match state.sessions.logout(&auth, refresh_token.as_deref()).await {
        Ok(()) => envelope::<()>(StatusCode::OK, "logout successful", None),
        Err(error) => handle_domain_error(&error),
    }
}
