use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use empathic_finance::{Config, FinanceService};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = Arc::new(Config::load());
    let bind = config
        .bind_addr()
        .with_context(|| format!("Invalid bind address '{}' (expected host:port)", config.server.bind))?;

    let service = FinanceService::new(config);
    let router = service.router();

    let listener = tokio::net::TcpListener::bind(bind).await?;
    let config = service.config();
    tracing::info!(
        %bind,
        name = %config.server.name,
        version = %config.server.version,
        live_news = config.news.has_live_key(),
        "Starting HTTP server"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
