//! HMAC Hashing API
//!
//! HTTP сервис для генерации HMAC подписей с выбором алгоритма хеширования

mod config;
mod error;
mod handlers;
mod server;
mod services;
mod utils;

use anyhow::Result;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hmac_hashing_api=info,tower_http=debug".into()),
        )
        .init();

    info!("Starting HMAC Hashing API...");

    let config = config::Config::load()?;
    info!("Configuration loaded: bind address={}", config.bind_addr());

    let services = services::Services::new();
    info!(
        "Services initialized: {} algorithms listed",
        services.hashing.algorithms().len()
    );

    if let Err(e) = server::start(config, services).await {
        error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}
