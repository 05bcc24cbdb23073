//! Admin address book endpoints.
//!
//! Every operation is gated by the same admin policy the composer uses to
//! decide whether the emails card is shown. Listing degrades to an empty
//! result for non-admins; everything else is forbidden.

use std::sync::Arc;

use api_protocol::{
    EmailAddress as EmailAddressDto,
    requests::{CreateEmailAddressRequest, UpdateEmailAddressRequest},
    responses::{DeleteResponse, EmailAddressesResponse},
};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use dashboard_store::DashboardStore;
use entities::{EmailAddress, User};

use super::{non_blank, parse_id, resolve_user};
use crate::error::{ServerError, ServerResult};
use crate::middleware::{AuthenticatedUser, require_user};
use crate::state::AppState;

/// Resolves the caller, failing with `Forbidden` unless they are the admin.
async fn require_admin<S: DashboardStore>(
    state: &AppState<S>,
    user: Option<Extension<AuthenticatedUser>>,
) -> ServerResult<User> {
    let session = require_user(user)?;
    if !state.is_admin(&session.email) {
        tracing::debug!(email = %session.email, "Address book access denied");
        return Err(ServerError::Forbidden);
    }
    resolve_user(state, &session).await
}

/// Loads an entry owned by `owner`. Entries of other users read as missing.
async fn owned_entry<S: DashboardStore>(
    state: &AppState<S>,
    owner: &User,
    id: &str,
) -> ServerResult<EmailAddress> {
    let id = parse_id(id, "Email address")?;
    state
        .store
        .get_email_address(id)
        .await?
        .filter(|entry| entry.user_id == owner.id)
        .ok_or_else(|| ServerError::NotFound("Email address".to_string()))
}

/// Lists the admin's address book. Non-admins get an empty list.
pub async fn list_email_addresses<S: DashboardStore>(
    State(state): State<Arc<AppState<S>>>,
    user: Option<Extension<AuthenticatedUser>>,
) -> ServerResult<Json<EmailAddressesResponse>> {
    let session = require_user(user)?;
    if !state.is_admin(&session.email) {
        return Ok(Json(EmailAddressesResponse {
            email_addresses: Vec::new(),
        }));
    }

    let user = resolve_user(&state, &session).await?;
    let entries = state.store.list_email_addresses(user.id).await?;

    Ok(Json(EmailAddressesResponse {
        email_addresses: entries.into_iter().map(EmailAddressDto::from).collect(),
    }))
}

/// Adds an entry to the admin's address book.
pub async fn create_email_address<S: DashboardStore>(
    State(state): State<Arc<AppState<S>>>,
    user: Option<Extension<AuthenticatedUser>>,
    Json(request): Json<CreateEmailAddressRequest>,
) -> ServerResult<(StatusCode, Json<EmailAddressDto>)> {
    let user = require_admin(&state, user).await?;

    let (Some(name), Some(email), Some(inbox_url)) = (
        non_blank(request.name),
        non_blank(request.email),
        non_blank(request.inbox_url),
    ) else {
        return Err(ServerError::Validation(
            "Name, email, and inboxUrl are required".to_string(),
        ));
    };

    let entry = state
        .store
        .create_email_address(EmailAddress::new(user.id, name, email, inbox_url))
        .await?;

    tracing::info!(entry_id = %entry.id, "Email address created");

    Ok((StatusCode::CREATED, Json(entry.into())))
}

/// Gets one entry of the admin's address book.
pub async fn get_email_address<S: DashboardStore>(
    State(state): State<Arc<AppState<S>>>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<String>,
) -> ServerResult<Json<EmailAddressDto>> {
    let user = require_admin(&state, user).await?;
    let entry = owned_entry(&state, &user, &id).await?;

    Ok(Json(entry.into()))
}

/// Updates an entry. Blank or missing fields keep their stored value.
pub async fn update_email_address<S: DashboardStore>(
    State(state): State<Arc<AppState<S>>>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<String>,
    Json(request): Json<UpdateEmailAddressRequest>,
) -> ServerResult<Json<EmailAddressDto>> {
    let user = require_admin(&state, user).await?;
    let mut entry = owned_entry(&state, &user, &id).await?;

    if let Some(name) = non_blank(request.name) {
        entry.name = name;
    }
    if let Some(email) = non_blank(request.email) {
        entry.email = email;
    }
    if let Some(inbox_url) = non_blank(request.inbox_url) {
        entry.inbox_url = inbox_url;
    }
    entry.updated_at = Utc::now();

    let entry = state.store.update_email_address(entry).await?;
    Ok(Json(entry.into()))
}

/// Removes an entry from the admin's address book.
pub async fn delete_email_address<S: DashboardStore>(
    State(state): State<Arc<AppState<S>>>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<String>,
) -> ServerResult<Json<DeleteResponse>> {
    let user = require_admin(&state, user).await?;
    let entry = owned_entry(&state, &user, &id).await?;

    state.store.delete_email_address(entry.id).await?;

    tracing::info!(entry_id = %entry.id, "Email address deleted");

    Ok(Json(DeleteResponse::new("Email address deleted successfully")))
}
