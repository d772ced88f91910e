use notes_api::api::build_app;
use notes_api::auth::jwt::JwtService;
use notes_api::config::Config;
use notes_api::core::services::NotesService;
use notes_api::infrastructure::storage::sqlite::SqliteStorage;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)))
        .init();
    info!(?config, "Loaded configuration");

    if config.uses_default_secret() {
        warn!("AUTHJWT_SECRET_KEY is not set; tokens are signed with the built-in default secret. Set it before deploying.");
    }

    let storage = SqliteStorage::connect(&config.database_url).await?;
    storage.migrate().await?;

    let jwt_service = JwtService::new(
        &config.jwt_secret,
        chrono::Duration::minutes(config.access_token_expires_minutes),
    );
    let service = Arc::new(NotesService::new(storage, jwt_service, config.bcrypt_cost));
    let app = build_app(service);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
