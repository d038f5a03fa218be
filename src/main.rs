use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use gymdesk::adapters::auth::StaticPasswordAuthenticator;
use gymdesk::adapters::cloudinary::CloudinaryPhotoStore;
use gymdesk::adapters::http::{build_router, AppState};
use gymdesk::adapters::mongo::{MongoDb, MongoMemberRepository};
use gymdesk::config::AppConfig;
use gymdesk::ports::SystemClock;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    let db = MongoDb::connect(&config.database.url, &config.database.name).await?;
    db.initialize_indexes().await?;
    db.health_check().await?;

    let state = AppState {
        member_repository: Arc::new(MongoMemberRepository::new(db)),
        photo_store: Arc::new(CloudinaryPhotoStore::new(&config.photos)),
        authenticator: Arc::new(StaticPasswordAuthenticator::new(
            config.auth.admin_password.clone(),
        )),
        clock: Arc::new(SystemClock),
        token_ttl_minutes: config.auth.token_ttl_minutes,
    };

    let app = build_router(state, config.server.request_timeout());

    let address = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(address).await.map_err(|e| {
        tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
        e
    })?;

    tracing::info!("Starting gymdesk on {}", address);
    axum::serve(listener, app).await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        e
    })?;

    Ok(())
}
