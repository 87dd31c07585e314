mod config;
mod http;
mod persistence;
mod service;

use anyhow::Context;
use clap::Parser;
use config::{Config, StorageKind, DATABASE_FILE};
use http::AppState;
use persistence::{Database, JsonCatalog, Store};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::parse();
    let _log_guard = init_tracing(&config);

    tracing::info!("Starting Mercado Fresco server");

    let data_dir = config.data_dir();
    tracing::info!("Using data directory: {}", data_dir.display());

    let store = match config.storage {
        StorageKind::Sqlite => {
            let db = Database::open(&data_dir.join(DATABASE_FILE))
                .await
                .context("failed to open SQLite database")?;
            Store::Sqlite(db)
        }
        StorageKind::Json => {
            std::fs::create_dir_all(&data_dir)
                .with_context(|| format!("failed to create {}", data_dir.display()))?;
            Store::Json(JsonCatalog::new(data_dir))
        }
    };
    tracing::info!(storage = store.backend(), "Storage ready");

    let api_token = config.api_token();
    if api_token.is_some() {
        tracing::info!("API token authentication enabled");
    }
    let app = http::app(AppState::new(store, api_token));

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    tracing::info!("Server listening on {}", config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Stdout logging with span durations, plus a daily rolling file when a log
/// directory is configured. The returned guard flushes the file on drop.
fn init_tracing(config: &Config) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stdout = fmt::layer().with_span_events(FmtSpan::CLOSE);

    let (file, guard) = match &config.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "mercado-fresco.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_span_events(FmtSpan::CLOSE)
                .with_writer(writer)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout)
        .with(file)
        .init();
    guard
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
