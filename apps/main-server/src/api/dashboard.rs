//! Dashboard composition endpoint.

use std::sync::Arc;

use api_protocol::{Quote, responses::DashboardResponse};
use axum::{Extension, Json, extract::State};
use chrono::{Datelike, Local, Timelike};
use dashboard_store::DashboardStore;
use entities::DayOfWeek;
use link_composer::{ComposeInput, gradient_class, greeting, random_quote, todays_activity};

use super::resolve_user;
use crate::error::ServerResult;
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;

/// Composes the start page for the caller.
///
/// Anonymous callers get the full catalog. Signed-in callers have their
/// preferences, custom links and training week loaded concurrently; nothing
/// is composed until all three have arrived.
pub async fn get_dashboard<S: DashboardStore>(
    State(state): State<Arc<AppState<S>>>,
    user: Option<Extension<AuthenticatedUser>>,
) -> ServerResult<Json<DashboardResponse>> {
    let now = Local::now();
    let today = DayOfWeek::from(now.weekday());
    let hour = now.hour();
    let quote = random_quote();
    let quote = Quote {
        text: quote.text.to_string(),
        author: quote.author.to_string(),
    };

    let Some(Extension(session)) = user else {
        let cards = state.composer().compose(&ComposeInput::anonymous())?;
        return Ok(Json(DashboardResponse {
            cards,
            greeting: greeting(hour, None),
            gradient_class: gradient_class(hour).to_string(),
            quote,
            city: None,
            display_name: None,
            is_admin: false,
            today,
        }));
    };

    let user = resolve_user(&state, &session).await?;
    let (preferences, custom_links, week) = tokio::try_join!(
        state.store.read_preferences(user.id),
        state.store.list_custom_links(user.id),
        state.store.read_training_week(user.id),
    )?;

    let prefs = &preferences.preferences;
    let city = prefs.city.as_deref().map(str::trim).filter(|c| !c.is_empty());
    let input = ComposeInput {
        is_authenticated: true,
        user_email: Some(session.email.as_str()),
        enabled_links: &prefs.enabled_links,
        has_set_preferences: preferences.has_set_preferences,
        custom_links: &custom_links,
        todays_training: Some(todays_activity(Some(&week), today)),
        city,
    };
    let cards = state.composer().compose(&input)?;

    let display_name = prefs
        .display_name
        .clone()
        .filter(|n| !n.trim().is_empty())
        .or_else(|| session.name.clone())
        .or_else(|| user.name.clone());

    Ok(Json(DashboardResponse {
        cards,
        greeting: greeting(hour, display_name.as_deref()),
        gradient_class: gradient_class(hour).to_string(),
        quote,
        city: city.map(str::to_string),
        display_name,
        is_admin: state.is_admin(&session.email),
        today,
    }))
}
