use actix_web::{http::StatusCode, web, HttpResponse};
use validator::Validate;

use sg_core::{RevocationStore, UserDirectory};

use crate::app::AppState;
use crate::dto::auth::{validation_messages, SignupRequest};
use crate::handlers::{envelope, error_envelope, handle_domain_error};

/// Handler for POST /api/v1/auth/signup
///
/// Creates an active account. Email, username and phone must be unused.
///
/// ## Success (201 Created)
/// ```json
/// { "message": "signup successful", "data": null, "errors": [], "status": "Created" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: validation failure, or `"<field>: already in use"`
/// - 500 Internal Server Error
pub async fn signup<R, U>(
    state: web::Data<AppState<R, U>>,
    request: web::Json<SignupRequest>,
) -> HttpResponse
where
    R: RevocationStore + ?Sized + 'static,
    U: UserDirectory + ?Sized + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return error_envelope(StatusCode::BAD_REQUEST, "", validation_messages(&errors));
    }

    match state.sessions.signup(request.into()).await {
        Ok(_) => envelope::<()>(StatusCode::CREATED, "signup successful", None),
        Err(error) => handle_domain_error(&error),
    }
}
