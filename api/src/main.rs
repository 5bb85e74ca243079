use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

use sg_api::app::{configure, AppState};
use sg_api::telemetry::init_tracing;
use sg_core::{
    AuthorizationGate, PasswordHasher, RevocationCleanupService, RevocationList, RevocationStore,
    SessionService, TokenCodec, UserDirectory, UserService,
};
use sg_infra::cache::RedisRevocationStore;
use sg_infra::database::{create_pool, ensure_schema, MySqlRevocationStore, MySqlUserDirectory};
use sg_infra::{BcryptPasswordHasher, InMemoryRevocationStore, InMemoryUserDirectory};
use sg_shared::{AppConfig, RevocationBackend};

type Stores = (Arc<dyn RevocationStore>, Arc<dyn UserDirectory>);

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging);
    config.validate().map_err(anyhow::Error::msg)?;

    info!(environment = %config.environment, "Starting SessionGate API server");
    if config.jwt.is_using_default_secret() {
        warn!("JWT_SECRET is not set, using the development secret");
    }

    let (revocation_store, user_directory) = build_stores(&config).await?;

    let codec = Arc::new(TokenCodec::new(&config.jwt));
    let revocations = RevocationList::new(Arc::clone(&revocation_store));
    let hasher: Arc<dyn PasswordHasher> = Arc::new(BcryptPasswordHasher::default());

    let gate = Arc::new(AuthorizationGate::new(
        Arc::clone(&codec),
        revocations.clone(),
        Arc::clone(&user_directory),
    ));
    let sessions = Arc::new(SessionService::new(
        Arc::clone(&user_directory),
        revocations,
        codec,
        hasher,
    ));
    let users = Arc::new(UserService::new(user_directory));
    let state = web::Data::new(AppState::new(gate, sessions, users));

    let cleanup = Arc::new(RevocationCleanupService::new(
        revocation_store,
        config.revocation.cleanup.clone(),
    ));
    let cleanup_task = cleanup.start_background_task();

    let max_payload = config.server.max_payload_size;
    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::JsonConfig::default().limit(max_payload))
            .app_data(web::PayloadConfig::new(max_payload))
            .configure(move |cfg| configure(cfg, state))
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    if let Some(task) = cleanup_task {
        task.abort();
    }
    Ok(())
}

async fn build_stores(config: &AppConfig) -> anyhow::Result<Stores> {
    let backend = config.revocation.backend;
    info!(?backend, "Selecting revocation store");

    match backend {
        RevocationBackend::Memory => {
            let revocations: Arc<dyn RevocationStore> = Arc::new(InMemoryRevocationStore::new());
            let users: Arc<dyn UserDirectory> = Arc::new(InMemoryUserDirectory::new());
            Ok((revocations, users))
        }
        RevocationBackend::Mysql | RevocationBackend::Redis => {
            let pool = create_pool(&config.database)
                .await
                .context("failed to connect to MySQL")?;
            if config.database.ensure_schema {
                ensure_schema(&pool).await.context("failed to create tables")?;
            }

            let users: Arc<dyn UserDirectory> = Arc::new(MySqlUserDirectory::new(pool.clone()));
            let revocations: Arc<dyn RevocationStore> = if backend == RevocationBackend::Redis {
                Arc::new(
                    RedisRevocationStore::connect(config.cache.clone())
                        .await
                        .context("failed to connect to Redis")?,
                )
            } else {
                Arc::new(MySqlRevocationStore::new(pool))
            };

            Ok((revocations, users))
        }
    }
}
