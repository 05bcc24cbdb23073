//! Preferences endpoints.

use std::sync::Arc;

use api_protocol::{requests::UpdatePreferencesRequest, responses::PreferencesResponse};
use axum::{Extension, Json, extract::State};
use dashboard_store::DashboardStore;
use entities::{PreferencesUpdate, UserPreferences};

use super::{non_blank, resolve_user};
use crate::error::ServerResult;
use crate::middleware::{AuthenticatedUser, require_user};
use crate::state::AppState;

fn to_response(preferences: UserPreferences, has_set_preferences: bool) -> PreferencesResponse {
    PreferencesResponse {
        enabled_links: preferences.enabled_links.into_iter().collect(),
        city: preferences.city,
        display_name: preferences.display_name,
        has_set_preferences,
    }
}

/// Reads the caller's preferences, creating an empty record on first read.
pub async fn get_preferences<S: DashboardStore>(
    State(state): State<Arc<AppState<S>>>,
    user: Option<Extension<AuthenticatedUser>>,
) -> ServerResult<Json<PreferencesResponse>> {
    let session = require_user(user)?;
    let user = resolve_user(&state, &session).await?;

    let read = state.store.read_preferences(user.id).await?;
    Ok(Json(to_response(read.preferences, read.has_set_preferences)))
}

/// Replaces the caller's preferences.
pub async fn update_preferences<S: DashboardStore>(
    State(state): State<Arc<AppState<S>>>,
    user: Option<Extension<AuthenticatedUser>>,
    Json(request): Json<UpdatePreferencesRequest>,
) -> ServerResult<Json<PreferencesResponse>> {
    let session = require_user(user)?;
    let user = resolve_user(&state, &session).await?;

    let update = PreferencesUpdate {
        enabled_links: request.enabled_links.into_iter().collect(),
        city: non_blank(request.city),
        display_name: non_blank(request.display_name),
    };
    let preferences = state.store.upsert_preferences(user.id, update).await?;

    tracing::info!(user_id = %user.id, "Preferences updated");

    Ok(Json(to_response(preferences, true)))
}
