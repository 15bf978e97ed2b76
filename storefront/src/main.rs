use std::sync::Arc;

use axum::http::HeaderValue;
use clap::Parser;
use mimalloc::MiMalloc;
use storefront::{
    config::Config,
    logger::configure_logger,
    server::{ServerState, StartupError, build_router},
};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {err}");
    }

    info!("Shutting down");
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = Config::parse();

    configure_logger();

    if config.metrics {
        metrics::init();
    }

    let allowed_origin = config.allowed_origin.parse::<HeaderValue>()?;
    let state = Arc::new(ServerState::from_config(&config)?);
    let router = build_router(state, allowed_origin);

    let listener = TcpListener::bind(config.bind).await?;

    info!(
        "Serving {} on {} (upstream {})",
        config.shop_name, config.bind, config.api_base_url
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if config.metrics {
        metrics::shutdown();
    }

    Ok(())
}
