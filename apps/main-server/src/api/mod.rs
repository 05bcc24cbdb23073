//! API endpoints.

pub mod auth;
pub mod custom_links;
pub mod dashboard;
pub mod emails;
pub mod links;
pub mod preferences;
pub mod training;
pub mod weather;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, put},
};
use dashboard_store::DashboardStore;
use entities::User;
use uuid::Uuid;

use crate::error::{ServerError, ServerResult};
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router<S: DashboardStore + 'static>() -> Router<Arc<AppState<S>>> {
    Router::new()
        // Auth
        .route("/api/auth/me", get(auth::get_current_user))
        // Catalog and dashboard
        .route("/api/links/available", get(links::list_available_links))
        .route("/api/dashboard", get(dashboard::get_dashboard))
        // Preferences
        .route(
            "/api/preferences",
            get(preferences::get_preferences).post(preferences::update_preferences),
        )
        // Custom links
        .route(
            "/api/custom-links",
            get(custom_links::list_custom_links).post(custom_links::create_custom_link),
        )
        .route(
            "/api/custom-links/:id",
            put(custom_links::update_custom_link).delete(custom_links::delete_custom_link),
        )
        // Training
        .route(
            "/api/training",
            get(training::get_training_week).put(training::update_training_week),
        )
        // Address book
        .route(
            "/api/emails",
            get(emails::list_email_addresses).post(emails::create_email_address),
        )
        .route(
            "/api/emails/:id",
            get(emails::get_email_address)
                .put(emails::update_email_address)
                .delete(emails::delete_email_address),
        )
        // Weather
        .route("/api/weather", get(weather::get_weather))
        // Health check
        .route("/health", get(health_check))
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

/// Loads the stored user for a session, creating it on first sight.
pub(crate) async fn resolve_user<S: DashboardStore>(
    state: &AppState<S>,
    session: &AuthenticatedUser,
) -> ServerResult<User> {
    Ok(state
        .store
        .get_or_create_user(&session.email, session.name.as_deref())
        .await?)
}

/// Parses a record id from a path. Malformed ids read as missing records.
pub(crate) fn parse_id(id: &str, entity: &str) -> ServerResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| ServerError::NotFound(entity.to_string()))
}

/// Trims an optional input, treating blank values as absent.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
