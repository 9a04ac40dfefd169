use anyhow::{Context, Result};
use clap::Parser;
use petclinic_core::Database;
use petclinic_web::{router, AppState, Cli, ServerConfig};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = ServerConfig::resolve(&cli).context("failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let db = if config.in_memory {
        info!("using in-memory database");
        Database::open_in_memory()
    } else {
        info!(path = %config.database_path.display(), "opening database");
        Database::open(&config.database_path)
    }
    .context("failed to open database")?;

    if config.should_seed() {
        db.seed_sample_data().context("failed to seed sample data")?;
    }

    let addr = config.bind_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "petclinic server listening");

    axum::serve(listener, router(AppState::new(db)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown requested");
    }
}
