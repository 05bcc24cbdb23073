//! Server error types.

use api_protocol::{ErrorBody, error_codes};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dashboard_store::StoreError;
use link_composer::ComposeError;

use crate::services::weather::WeatherError;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// No session identity.
    #[error("Authentication required")]
    Unauthenticated,

    /// Identity present but not allowed to perform this action.
    #[error("Forbidden")]
    Forbidden,

    /// Record missing or owned by someone else.
    #[error("{0} not found")]
    NotFound(String),

    /// Missing or malformed request input.
    #[error("{0}")]
    Validation(String),

    /// An upstream collaborator could not be reached.
    #[error("{0}")]
    UpstreamUnavailable(String),

    /// Stored data outside the known vocabulary.
    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ServerError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { entity_type, .. } => ServerError::NotFound(entity_type.to_string()),
            StoreError::Corrupt { .. } => ServerError::DataIntegrity(e.to_string()),
            StoreError::Database(source) => {
                tracing::error!(error = %source, "Store operation failed");
                ServerError::UpstreamUnavailable("Data store unavailable".to_string())
            }
            other => ServerError::Internal(other.to_string()),
        }
    }
}

impl From<ComposeError> for ServerError {
    fn from(e: ComposeError) -> Self {
        ServerError::DataIntegrity(e.to_string())
    }
}

impl From<WeatherError> for ServerError {
    fn from(e: WeatherError) -> Self {
        match e {
            WeatherError::CityNotFound(_) => ServerError::NotFound("City".to_string()),
            WeatherError::Unavailable(reason) => ServerError::UpstreamUnavailable(format!(
                "Failed to fetch weather data: {reason}"
            )),
        }
    }
}

impl ServerError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ServerError::Unauthenticated => (StatusCode::UNAUTHORIZED, error_codes::UNAUTHENTICATED),
            ServerError::Forbidden => (StatusCode::FORBIDDEN, error_codes::FORBIDDEN),
            ServerError::NotFound(_) => (StatusCode::NOT_FOUND, error_codes::NOT_FOUND),
            ServerError::Validation(_) => (StatusCode::BAD_REQUEST, error_codes::VALIDATION_ERROR),
            ServerError::UpstreamUnavailable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                error_codes::UPSTREAM_UNAVAILABLE,
            ),
            ServerError::DataIntegrity(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_codes::DATA_INTEGRITY_ERROR,
            ),
            ServerError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL_ERROR),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match &self {
            ServerError::DataIntegrity(reason) => {
                tracing::error!(reason = %reason, "Data integrity violation");
                self.to_string()
            }
            ServerError::Internal(reason) => {
                tracing::error!(reason = %reason, "Internal error");
                "Internal server error".to_string()
            }
            ServerError::UpstreamUnavailable(reason) => {
                tracing::warn!(reason = %reason, "Upstream unavailable");
                self.to_string()
            }
            _ => self.to_string(),
        };

        (status, Json(ErrorBody::new(code, message))).into_response()
    }
}

/// Result type alias for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_not_found_maps_to_404() {
        let err = ServerError::from(StoreError::not_found("CustomLink", "abc"));
        assert_eq!(err.status_and_code().0, StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "CustomLink not found");
    }

    #[test]
    fn test_compose_error_is_data_integrity() {
        let err = ServerError::from(ComposeError::UnknownTrainingActivity {
            activity: "yoga".to_string(),
        });
        assert_eq!(
            err.status_and_code(),
            (StatusCode::INTERNAL_SERVER_ERROR, error_codes::DATA_INTEGRITY_ERROR)
        );
    }

    #[test]
    fn test_weather_errors() {
        let not_found = ServerError::from(WeatherError::CityNotFound("Atlantis".to_string()));
        assert_eq!(not_found.status_and_code().0, StatusCode::NOT_FOUND);

        let unavailable = ServerError::from(WeatherError::Unavailable("timeout".to_string()));
        assert_eq!(unavailable.status_and_code().0, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_store_conflict_is_internal_with_generic_message() {
        let err = ServerError::from(StoreError::already_exists("User", "a@example.com"));
        assert_eq!(
            err.status_and_code(),
            (StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL_ERROR)
        );

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_corrupt_record_is_data_integrity() {
        let err = ServerError::from(StoreError::corrupt("UserPreferences", "bad json"));
        assert_eq!(err.status_and_code().1, error_codes::DATA_INTEGRITY_ERROR);
    }
}
