use anyhow::{Context, Result};
use regform_server::{app, AppState, Config};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        // A missing .env is normal
        if !e.not_found() {
            eprintln!("Failed to load .env: {}", e);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load_default()
        .unwrap_or_else(|e| {
            warn!("Failed to load config: {:#}, using defaults", e);
            Config::default()
        })
        .with_env_overrides()?;

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server running at http://{}", addr);
    axum::serve(listener, app(AppState::new(config)))
        .await
        .context("Server error")?;

    Ok(())
}
