use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod models;
mod routes;
mod services;
mod utils;

use api::TiingoClient;
use config::AppConfig;
use routes::AppState;

#[tokio::main]
async fn main() {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env()
            .add_directive("stock_alert_service=debug".parse().unwrap())
            .add_directive("tower_http=info".parse().unwrap())
            .add_directive("hyper=warn".parse().unwrap()))
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("🚀 Starting stock alert service...");
    if !dotenv_loaded {
        warn!("No .env file found, using process environment only");
    }

    let config = AppConfig::from_env();
    if config.api_key.is_none() {
        warn!("TIINGO_API_KEY is not set; upstream requests will fail with 500");
    }

    let client = match TiingoClient::new(
        config.api_key.clone(),
        config.tiingo_base_url.clone(),
        config.upstream_timeout,
    ) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create Tiingo client: {}", e);
            return;
        }
    };

    let app = routes::router(AppState::new(Arc::new(client)), config.request_timeout);

    let bind_addr = config.bind_addr();
    let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind {}: {}", bind_addr, e);
            return;
        }
    };

    info!("🌐 Server listening on http://{}", bind_addr);
    info!("📊 Available endpoints:");
    info!("   GET  /health");
    info!("   GET  /stocks?ticker=<symbol>&startDate=<date>&interval=<freq>");
    info!("   GET  /check-alert?ticker=<symbol>&price=<price>&direction=<above|below>");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
    }

    info!("Server stopped");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        // Without a signal handler, keep serving until the process is killed
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
