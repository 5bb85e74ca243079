use actix_web::{http::StatusCode, web, HttpResponse};

use sg_core::{RevocationStore, UserDirectory};

use crate::app::AppState;
use crate::dto::UsersResponse;
use crate::handlers::{envelope, handle_domain_error};
use crate::middleware::Authenticated;

/// Handler for GET /api/v1/users
///
/// Profiles of every account except the caller's.
pub async fn list_users<R, U>(state: web::Data<AppState<R, U>>, auth: Authenticated) -> HttpResponse
where
    R: RevocationStore + ?Sized + 'static,
    U: UserDirectory + ?Sized + 'static,
{
    match state.users.list_others(&auth.user).await {
        Ok(users) => {
            let users = users.iter().map(|u| u.profile()).collect();
            envelope(
                StatusCode::OK,
                "retrieved users successfully",
                Some(UsersResponse { users }),
            )
        }
        Err(error) => handle_domain_error(&error),
    }
}
