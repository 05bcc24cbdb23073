//! Training schedule endpoints.

use std::sync::Arc;

use api_protocol::{requests::UpdateTrainingWeekRequest, responses::TrainingWeekResponse};
use axum::{Extension, Json, extract::State};
use dashboard_store::DashboardStore;
use entities::{DayOfWeek, TrainingActivity};

use super::resolve_user;
use crate::error::{ServerError, ServerResult};
use crate::middleware::{AuthenticatedUser, require_user};
use crate::state::AppState;

/// Reads the caller's week. Days never set read as `rest`.
pub async fn get_training_week<S: DashboardStore>(
    State(state): State<Arc<AppState<S>>>,
    user: Option<Extension<AuthenticatedUser>>,
) -> ServerResult<Json<TrainingWeekResponse>> {
    let session = require_user(user)?;
    let user = resolve_user(&state, &session).await?;

    Ok(Json(state.store.read_training_week(user.id).await?))
}

/// Upserts the given days and returns the full week.
///
/// Every entry is validated before anything is written, so a bad entry
/// leaves the stored week untouched.
pub async fn update_training_week<S: DashboardStore>(
    State(state): State<Arc<AppState<S>>>,
    user: Option<Extension<AuthenticatedUser>>,
    Json(request): Json<UpdateTrainingWeekRequest>,
) -> ServerResult<Json<TrainingWeekResponse>> {
    let session = require_user(user)?;

    let week = request
        .week
        .filter(|week| !week.is_empty())
        .ok_or_else(|| ServerError::Validation("Week is required".to_string()))?;

    let entries = week
        .iter()
        .map(|(day, activity)| {
            let day: DayOfWeek = day
                .parse()
                .map_err(|e: entities::UnknownDayOfWeek| ServerError::Validation(e.to_string()))?;
            let activity: TrainingActivity = activity.parse().map_err(
                |e: entities::UnknownTrainingActivity| ServerError::Validation(e.to_string()),
            )?;
            Ok((day, activity))
        })
        .collect::<ServerResult<Vec<_>>>()?;

    let user = resolve_user(&state, &session).await?;
    for (day, activity) in entries {
        state
            .store
            .upsert_training_day(user.id, day, activity.as_str())
            .await?;
    }

    tracing::info!(user_id = %user.id, days = week.len(), "Training week updated");

    Ok(Json(state.store.read_training_week(user.id).await?))
}
