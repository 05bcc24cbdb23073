//! Start page server binary.

use std::net::SocketAddr;
use std::sync::Arc;

use dashboard_store::{DashboardStore, MemoryDashboardStore, SqliteDashboardStore};
use startpage_server::{
    config::Config, create_app, create_state, init_tracing,
    services::weather::CerealWeatherClient,
};

async fn serve<S: DashboardStore + 'static>(config: Config, store: S) -> anyhow::Result<()> {
    let weather = Arc::new(CerealWeatherClient::new(&config.weather_api_url)?);
    let addr: SocketAddr = config.server_addr().parse()?;

    let state = create_state(config, store, weather)?;
    let app = create_app(state);

    tracing::info!(addr = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    init_tracing(&config.log_level);

    tracing::info!(
        single_user_mode = config.single_user_mode,
        admin_configured = config.admin_email.as_deref().is_some_and(|e| !e.is_empty()),
        "Starting start page server"
    );

    if config.uses_memory_store() {
        tracing::warn!("Using in-memory store; data is lost on exit");
        serve(config, MemoryDashboardStore::new()).await
    } else {
        let store = SqliteDashboardStore::connect(&config.database_url).await?;
        tracing::info!(database_url = %config.database_url, "Connected to database");
        serve(config, store).await
    }
}
