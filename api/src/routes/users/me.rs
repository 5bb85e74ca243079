use actix_web::{http::StatusCode, web, HttpResponse};
use validator::Validate;

use sg_core::{RevocationStore, UserDirectory};

use crate::app::AppState;
use crate::dto::auth::validation_messages;
use crate::dto::UpdateProfileRequest;
use crate::handlers::{envelope, error_envelope, handle_domain_error};
use crate::middleware::Authenticated;

/// Handler for GET /api/v1/me
///
/// Public profile fields of the authenticated user.
pub async fn me(auth: Authenticated) -> HttpResponse {
    envelope(
        StatusCode::OK,
        "user details retrieved correctly",
        Some(auth.user.profile()),
    )
}

/// Handler for PUT /api/v1/me
///
/// Replaces first name, last name, phone and image. Email and username
/// stay as they are.
///
/// ## Errors
/// - 400 Bad Request: validation failure, or `"phone: already in use"`
/// - 500 Internal Server Error
pub async fn update_me<R, U>(
    state: web::Data<AppState<R, U>>,
    auth: Authenticated,
    request: web::Json<UpdateProfileRequest>,
) -> HttpResponse
where
    R: RevocationStore + ?Sized + 'static,
    U: UserDirectory + ?Sized + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return error_envelope(StatusCode::BAD_REQUEST, "", validation_messages(&errors));
    }

    match state.users.update_profile(&auth.user, request.into()).await {
        Ok(user) => envelope(StatusCode::OK, "user updated successfully", Some(user.profile())),
        Err(error) => handle_domain_error(&error),
    }
}
