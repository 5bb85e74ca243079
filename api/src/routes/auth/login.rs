use actix_web::{http::StatusCode, web, HttpResponse};
use validator::Validate;

use sg_core::{RevocationStore, UserDirectory};

use crate::app::AppState;
use crate::dto::auth::{validation_messages, LoginRequest, LoginResponse};
use crate::handlers::{envelope, error_envelope, handle_domain_error};

/// Handler for POST /api/v1/auth/login
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "message": "login successful",
///     "data": { "user": { ... }, "access_token": "...", "refresh_token": "..." },
///     "errors": [],
///     "status": "OK"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: missing fields, or the account is inactive
/// - 401 Unauthorized: unknown username or wrong password
pub async fn login<R, U>(
    state: web::Data<AppState<R, U>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    R: RevocationStore + ?Sized + 'static,
    U: UserDirectory + ?Sized + 'static,
{
    if let Err(errors) = request.validate() {
        return error_envelope(StatusCode::BAD_REQUEST, "", validation_messages(&errors));
    }

    match state.sessions.login(&request.username, &request.password).await {
        Ok(outcome) => {
            let data = LoginResponse {
                user: outcome.user,
                access_token: outcome.tokens.access_token,
                refresh_token: outcome.tokens.refresh_token,
            };
            envelope(StatusCode::OK, "login successful", Some(data))
        }
        Err(error) => handle_domain_error(&error),
    }
}
