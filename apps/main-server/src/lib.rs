//! Start page server.
//!
//! Serves the dashboard API: card composition, preferences, custom links,
//! the training schedule, the admin address book and a weather proxy.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;

use std::sync::Arc;

use auth::{JwtConfig, JwtManager};
use axum::Router;
use dashboard_store::DashboardStore;
use link_composer::CatalogError;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::services::weather::WeatherProvider;
use crate::state::{AppState, create_shared_state};

/// Creates the application router with all routes configured.
pub fn create_app<S: DashboardStore + 'static>(state: Arc<AppState<S>>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api::create_router()
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::optional_auth_middleware::<S>,
        ))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Creates the application state with the given configuration, store and
/// weather provider.
pub fn create_state<S: DashboardStore>(
    config: Config,
    store: S,
    weather: Arc<dyn WeatherProvider>,
) -> Result<Arc<AppState<S>>, CatalogError> {
    let jwt_manager = if config.auth_enabled() {
        config.jwt_secret.as_ref().map(|secret| {
            let jwt_config =
                JwtConfig::new(secret).with_expiration_hours(config.jwt_expiration_hours);
            JwtManager::new(jwt_config)
        })
    } else {
        None
    };

    create_shared_state(config, store, jwt_manager, weather)
}

/// Initializes tracing with the given log level.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
