//! Application state and route table

use std::sync::Arc;

use actix_web::{web, HttpResponse};

use sg_core::{AuthorizationGate, RevocationStore, SessionService, UserDirectory, UserService};

use crate::handlers::error_envelope;
use crate::middleware::SessionGuard;
use crate::routes::{auth, health, users};

/// Shared services handed to every handler
pub struct AppState<R: ?Sized, U: ?Sized>
where
    R: RevocationStore,
    U: UserDirectory,
{
    pub gate: Arc<AuthorizationGate<R, U>>,
    pub sessions: Arc<SessionService<R, U>>,
    pub users: Arc<UserService<U>>,
}

impl<R, U> AppState<R, U>
where
    R: RevocationStore + ?Sized,
    U: UserDirectory + ?Sized,
{
    pub fn new(
        gate: Arc<AuthorizationGate<R, U>>,
        sessions: Arc<SessionService<R, U>>,
        users: Arc<UserService<U>>,
    ) -> Self {
        Self {
            gate,
            sessions,
            users,
        }
    }
}

/// Register state and routes on an `App` or test service
///
/// ```text
/// GET  /health
/// POST /api/v1/auth/signup
/// POST /api/v1/auth/login
/// POST /api/v1/auth/logout   (guarded)
/// GET  /api/v1/me            (guarded)
/// PUT  /api/v1/me            (guarded)
/// GET  /api/v1/users         (guarded)
/// POST /api/v1/users/lookup  (guarded)
/// ```
pub fn configure<R, U>(cfg: &mut web::ServiceConfig, state: web::Data<AppState<R, U>>)
where
    R: RevocationStore + ?Sized + 'static,
    U: UserDirectory + ?Sized + 'static,
{
    let guard = SessionGuard::new(Arc::clone(&state.gate));

    cfg.app_data(state)
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/signup", web::post().to(auth::signup::<R, U>))
                        .route("/login", web::post().to(auth::login::<R, U>))
                        .route(
                            "/logout",
                            web::post().to(auth::logout::<R, U>).wrap(guard.clone()),
                        ),
                )
                .service(
                    web::resource("/me")
                        .route(web::get().to(users::me))
                        .route(web::put().to(users::update_me::<R, U>))
                        .wrap(guard.clone()),
                )
                .service(
                    web::scope("/users")
                        .route("", web::get().to(users::list_users::<R, U>))
                        .route("/lookup", web::post().to(users::find_by_username::<R, U>))
                        .wrap(guard),
                ),
        )
        .default_service(web::route().to(not_found));
}

async fn not_found() -> HttpResponse {
    error_envelope(
        actix_web::http::StatusCode::NOT_FOUND,
        "",
        vec!["not found".to_string()],
    )
}
