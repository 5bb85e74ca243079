use actix_web::{http::StatusCode, web, HttpResponse};
use validator::Validate;

use sg_core::{RevocationStore, UserDirectory};

use crate::app::AppState;
use crate::dto::auth::validation_messages;
use crate::dto::UsernameRequest;
use crate::handlers::{envelope, error_envelope, handle_domain_error};

/// Handler for POST /api/v1/users/lookup
///
/// ## Request Body
/// ```json
/// { "username": "ada" }
/// ```
///
/// ## Errors
/// - 400 Bad Request: missing username, or `"user is inactive"`
/// - 404 Not Found: `"user not found"`
pub async fn find_by_username<R, U>(
    state: web::Data<AppState<R, U>>,
    request: web::Json<UsernameRequest>,
) -> HttpResponse
where
    R: RevocationStore + ?Sized + 'static,
    U: UserDirectory + ?Sized + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return error_envelope(StatusCode::BAD_REQUEST, "", validation_messages(&errors));
    }

    match state.users.find_by_username(&request.username).await {
        Ok(user) => envelope(
            StatusCode::OK,
            "user retrieved successfully",
            Some(user.profile()),
        ),
        Err(error) => handle_domain_error(&error),
    }
}
