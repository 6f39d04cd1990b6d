mod api;
mod app_state;
mod config;
mod core;
mod domain;
mod errors;
mod logging;
mod routes;
mod ui;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::AppConfig;
use crate::ui::client::GatewayClient;
use crate::ui::state::UiState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    let _guard = logging::init_tracing(config.self_log_dir.as_deref())?;

    info!(
        logs_dir = %config.logs_dir.display(),
        config_file = %config.config_file.display(),
        "Starting logdesk"
    );

    let gateway = routes::app_router(&config.cors_origin)?
        .with_state(app_state::build_app_state(&config));

    let client = GatewayClient::new(config.gateway_url.clone());
    let ui = ui::routes::ui_router(UiState::new(Arc::new(client)));

    tokio::try_join!(
        serve("File gateway", config.gateway_addr, gateway),
        serve("Editor UI", config.ui_addr, ui),
    )?;

    info!("Shut down cleanly");
    Ok(())
}

async fn serve(name: &'static str, addr: SocketAddr, app: Router) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {name} on {addr}"))?;
    info!("{name} listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .with_context(|| format!("{name} failed"))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(?e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
