//! Custom link endpoints.

use std::sync::Arc;

use api_protocol::{
    CustomLink as CustomLinkDto,
    requests::CustomLinkRequest,
    responses::{CustomLinksResponse, DeleteResponse},
};
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use dashboard_store::DashboardStore;
use entities::{
    CustomLink, CustomLinkUpdate, DEFAULT_CUSTOM_LINK_COLOR, DEFAULT_CUSTOM_LINK_GRADIENT,
};

use super::{non_blank, parse_id, resolve_user};
use crate::error::{ServerError, ServerResult};
use crate::middleware::{AuthenticatedUser, require_user};
use crate::state::AppState;

const REQUIRED_FIELDS: &str = "Title, URL, and icon are required";

/// Validated fields of a custom link request.
struct LinkFields {
    title: String,
    url: String,
    icon: String,
    color: Option<String>,
    gradient: Option<String>,
}

impl TryFrom<CustomLinkRequest> for LinkFields {
    type Error = ServerError;

    fn try_from(request: CustomLinkRequest) -> Result<Self, Self::Error> {
        let (Some(title), Some(url), Some(icon)) = (
            non_blank(request.title),
            non_blank(request.url),
            non_blank(request.icon),
        ) else {
            return Err(ServerError::Validation(REQUIRED_FIELDS.to_string()));
        };

        Ok(Self {
            title,
            url,
            icon,
            color: non_blank(request.color),
            gradient: non_blank(request.gradient),
        })
    }
}

/// Lists the caller's custom links, oldest first.
pub async fn list_custom_links<S: DashboardStore>(
    State(state): State<Arc<AppState<S>>>,
    user: Option<Extension<AuthenticatedUser>>,
) -> ServerResult<Json<CustomLinksResponse>> {
    let session = require_user(user)?;
    let user = resolve_user(&state, &session).await?;

    let links = state.store.list_custom_links(user.id).await?;
    Ok(Json(CustomLinksResponse {
        custom_links: links.into_iter().map(CustomLinkDto::from).collect(),
    }))
}

/// Creates a custom link owned by the caller.
pub async fn create_custom_link<S: DashboardStore>(
    State(state): State<Arc<AppState<S>>>,
    user: Option<Extension<AuthenticatedUser>>,
    Json(request): Json<CustomLinkRequest>,
) -> ServerResult<(StatusCode, Json<CustomLinkDto>)> {
    let session = require_user(user)?;
    let fields = LinkFields::try_from(request)?;
    let user = resolve_user(&state, &session).await?;

    let link = CustomLink::new(user.id, fields.title, fields.url, fields.icon)
        .with_colors(fields.color, fields.gradient);
    let link = state.store.create_custom_link(link).await?;

    tracing::info!(link_id = %link.id, user_id = %user.id, "Custom link created");

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Replaces a custom link owned by the caller.
pub async fn update_custom_link<S: DashboardStore>(
    State(state): State<Arc<AppState<S>>>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<String>,
    Json(request): Json<CustomLinkRequest>,
) -> ServerResult<Json<CustomLinkDto>> {
    let session = require_user(user)?;
    let fields = LinkFields::try_from(request)?;
    let id = parse_id(&id, "Custom link")?;
    let user = resolve_user(&state, &session).await?;

    let update = CustomLinkUpdate {
        title: fields.title,
        url: fields.url,
        icon: fields.icon,
        color: fields
            .color
            .unwrap_or_else(|| DEFAULT_CUSTOM_LINK_COLOR.to_string()),
        gradient: fields
            .gradient
            .unwrap_or_else(|| DEFAULT_CUSTOM_LINK_GRADIENT.to_string()),
    };

    let link = state
        .store
        .update_custom_link(user.id, id, update)
        .await?
        .ok_or_else(|| ServerError::NotFound("Custom link".to_string()))?;

    Ok(Json(link.into()))
}

/// Deletes a custom link owned by the caller.
pub async fn delete_custom_link<S: DashboardStore>(
    State(state): State<Arc<AppState<S>>>,
    user: Option<Extension<AuthenticatedUser>>,
    Path(id): Path<String>,
) -> ServerResult<Json<DeleteResponse>> {
    let session = require_user(user)?;
    let id = parse_id(&id, "Custom link")?;
    let user = resolve_user(&state, &session).await?;

    if !state.store.delete_custom_link(user.id, id).await? {
        return Err(ServerError::NotFound("Custom link".to_string()));
    }

    tracing::info!(link_id = %id, user_id = %user.id, "Custom link deleted");

    Ok(Json(DeleteResponse::new("Custom link deleted successfully")))
}
