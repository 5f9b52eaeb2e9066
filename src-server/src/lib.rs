//! Shopping List Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Key-value stores and whole-list persistence
//! - commands: Store Gateway operations
//! - http: axum routes, CORS and error mapping

pub mod config;
pub mod commands;
pub mod domain;
pub mod http;
pub mod logging;
pub mod repository;

use anyhow::Context;
use tokio::net::TcpListener;

use config::{ServerConfig, StoreBackend};
use repository::{KvListStore, MemoryKvStore, RestKvStore, SqliteKvStore};

pub use http::{build_router, AppState};

/// Build the list store selected by the configuration
pub fn open_store(config: &ServerConfig) -> anyhow::Result<AppState> {
    let key = config.list_key.clone();
    let state = match &config.backend {
        StoreBackend::Memory => {
            tracing::warn!("using in-memory store; the list is lost on restart");
            AppState::new(KvListStore::new(MemoryKvStore::new(), key))
        }
        StoreBackend::Sqlite { path } => {
            let kv = SqliteKvStore::open(path)
                .with_context(|| format!("failed to open sqlite store at {}", path.display()))?;
            AppState::new(KvListStore::new(kv, key))
        }
        StoreBackend::Rest { url, token } => AppState::new(KvListStore::new(RestKvStore::new(url, token), key)),
    };
    Ok(state)
}

/// Serve on an already-bound listener until Ctrl-C
pub async fn serve(listener: TcpListener, state: AppState) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "shopping list gateway listening");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

pub async fn run() -> anyhow::Result<()> {
    let config = ServerConfig::from_env()?;
    logging::init_logging(config.log_json);

    let state = open_store(&config)?;
    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;

    serve(listener, state).await
}
