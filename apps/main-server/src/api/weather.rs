//! Weather proxy endpoint.

use std::sync::Arc;

use api_protocol::{WeatherReport, requests::WeatherQuery};
use axum::{
    Extension, Json,
    extract::{Query, State},
};
use dashboard_store::DashboardStore;

use super::non_blank;
use crate::error::{ServerError, ServerResult};
use crate::middleware::{AuthenticatedUser, require_user};
use crate::state::AppState;

/// Fetches current conditions and the forecast for `?city=`.
pub async fn get_weather<S: DashboardStore>(
    State(state): State<Arc<AppState<S>>>,
    user: Option<Extension<AuthenticatedUser>>,
    Query(query): Query<WeatherQuery>,
) -> ServerResult<Json<WeatherReport>> {
    require_user(user)?;

    let city = non_blank(query.city)
        .ok_or_else(|| ServerError::Validation("City parameter is required".to_string()))?;

    let report = state.weather.fetch(city.trim()).await?;
    Ok(Json(report))
}
