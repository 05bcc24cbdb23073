//! Authentication API endpoints.

use std::sync::Arc;

use api_protocol::responses::CurrentUserResponse;
use axum::{Extension, Json, extract::State};
use dashboard_store::DashboardStore;

use super::resolve_user;
use crate::error::ServerResult;
use crate::middleware::{AuthenticatedUser, require_user};
use crate::state::AppState;

/// Gets the current authenticated user.
pub async fn get_current_user<S: DashboardStore>(
    State(state): State<Arc<AppState<S>>>,
    user: Option<Extension<AuthenticatedUser>>,
) -> ServerResult<Json<CurrentUserResponse>> {
    let session = require_user(user)?;
    let user = resolve_user(&state, &session).await?;

    Ok(Json(CurrentUserResponse {
        is_admin: state.is_admin(&session.email),
        user: user.into(),
    }))
}
