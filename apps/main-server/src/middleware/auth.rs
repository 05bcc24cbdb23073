//! Authentication middleware.

use std::sync::Arc;

use auth::Claims;
use axum::{
    Extension,
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use dashboard_store::DashboardStore;

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

/// Authenticated user information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Identity provider subject.
    pub subject: String,
    /// Session email. This is the identity used for lookups.
    pub email: String,
    /// User display name.
    pub name: Option<String>,
}

impl TryFrom<Claims> for AuthenticatedUser {
    type Error = auth::AuthError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let email = claims.session_email()?.to_string();
        Ok(Self {
            subject: claims.sub,
            email,
            name: claims.name,
        })
    }
}

/// Returns the session user or `Unauthenticated`.
pub fn require_user(user: Option<Extension<AuthenticatedUser>>) -> ServerResult<AuthenticatedUser> {
    user.map(|Extension(user)| user)
        .ok_or(ServerError::Unauthenticated)
}

/// Extracts the JWT token from the Authorization header.
fn extract_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

/// Optional authentication middleware.
///
/// Stores an [`AuthenticatedUser`] in the request extensions when a valid
/// bearer token is present. Requests without one pass through anonymously;
/// handlers that need an identity use [`require_user`]. In single-user mode
/// every request is the configured local user.
pub async fn optional_auth_middleware<S: DashboardStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    mut request: Request,
    next: Next,
) -> Response {
    if !state.auth_enabled() {
        let local = AuthenticatedUser {
            subject: "local".to_string(),
            email: state.config.local_user_email.clone(),
            name: state.config.local_user_name.clone(),
        };
        request.extensions_mut().insert(local);
        return next.run(request).await;
    }

    let Some(jwt_manager) = &state.jwt_manager else {
        tracing::error!("JWT manager not configured but auth is enabled");
        return next.run(request).await;
    };

    if let Some(token) = extract_token(&request) {
        match jwt_manager.validate_token(token) {
            Ok(claims) => match AuthenticatedUser::try_from(claims) {
                Ok(user) => {
                    request.extensions_mut().insert(user);
                }
                Err(e) => tracing::debug!(error = %e, "Rejected token claims"),
            },
            Err(e) => tracing::debug!(error = %e, "Rejected bearer token"),
        }
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticated_user_from_claims() {
        let claims = Claims::new(
            "sub-123",
            "test@example.com",
            Some("Test User".to_string()),
            auth::DEFAULT_JWT_ISSUER,
            24,
        );

        let user = AuthenticatedUser::try_from(claims).unwrap();
        assert_eq!(user.subject, "sub-123");
        assert_eq!(user.email, "test@example.com");
        assert_eq!(user.name, Some("Test User".to_string()));
    }

    #[test]
    fn test_blank_email_is_rejected() {
        let claims = Claims::new("sub-123", "  ", None, auth::DEFAULT_JWT_ISSUER, 24);
        assert!(AuthenticatedUser::try_from(claims).is_err());
    }

    #[test]
    fn test_require_user() {
        assert!(matches!(require_user(None), Err(ServerError::Unauthenticated)));

        let user = AuthenticatedUser {
            subject: "s".to_string(),
            email: "a@example.com".to_string(),
            name: None,
        };
        assert_eq!(require_user(Some(Extension(user.clone()))).unwrap(), user);
    }
}
