//! Catalog endpoints.

use std::sync::Arc;

use api_protocol::responses::AvailableLinksResponse;
use axum::{Json, extract::State};
use dashboard_store::DashboardStore;

use crate::state::AppState;

/// Lists the links every user can enable.
pub async fn list_available_links<S: DashboardStore>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<AvailableLinksResponse> {
    Json(AvailableLinksResponse {
        available_links: state.catalog.available_links().to_vec(),
    })
}
