// Main entry point - Configuration, tracing and server setup
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use dashboard_codec::application::dashboard_service::DashboardService;
use dashboard_codec::infrastructure::config::load_server_config;
use dashboard_codec::presentation::app_state::AppState;
use dashboard_codec::presentation::handlers::{health_check, normalize_dashboard, normalize_panel};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_server_config()?;
    let addr = config.server.socket_addr()?;

    let state = Arc::new(AppState {
        dashboard_service: DashboardService::new(),
    });

    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/panels/normalize", post(normalize_panel))
        .route("/dashboards/normalize", post(normalize_dashboard))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    tracing::info!("Starting dashboard-codec service on {}", addr);
    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
