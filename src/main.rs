//! Wiring & DI. Entry point: load config, bootstrap adapters, inject into use cases, serve HTTP.
//! No business logic here.

use account_service::adapters::handlers::create_configured_dispatcher;
use account_service::adapters::http::{self, AppState};
use account_service::adapters::persistence::{InMemoryUserRepo, SqliteUserRepo};
use account_service::ports::UserRepository;
use account_service::shared::config::{AppConfig, StorageBackend};
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().map_err(|e| anyhow::anyhow!("config: {}", e))?;

    // --- Repository ---
    let repo: Arc<dyn UserRepository> = match cfg.storage_or_default() {
        StorageBackend::Sqlite => {
            let data_dir = cfg.data_dir_or_default();
            let repo = SqliteUserRepo::connect(&data_dir)
                .await
                .map_err(|e| anyhow::anyhow!("SQLite connect failed: {}", e))?;
            Arc::new(repo)
        }
        StorageBackend::Memory => {
            warn!("using in-memory storage; users are lost on shutdown");
            Arc::new(InMemoryUserRepo::new())
        }
    };

    // --- Events: dispatcher with notification, audit and analytics handlers ---
    let (dispatcher, analytics) = create_configured_dispatcher();
    let dispatcher = Arc::new(dispatcher);

    // --- Use cases + router ---
    let state = AppState::new(repo, dispatcher);
    let app = http::app(state);

    let addr = cfg.listen_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %addr, storage = ?cfg.storage_or_default(), "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    let stats = analytics.snapshot();
    info!(
        registrations = stats.registrations,
        adult_registrations = stats.adult_registrations,
        email_changes = stats.email_changes,
        deletions = stats.deletions,
        "server stopped"
    );
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl-C; running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
