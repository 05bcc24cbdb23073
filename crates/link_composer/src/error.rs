//! Composition error types.

use thiserror::Error;

/// Errors that can occur while composing the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    /// A stored training activity is outside the known vocabulary.
    #[error("training activity {activity:?} is not a known activity")]
    UnknownTrainingActivity { activity: String },
}

impl From<entities::UnknownTrainingActivity> for ComposeError {
    fn from(e: entities::UnknownTrainingActivity) -> Self {
        ComposeError::UnknownTrainingActivity { activity: e.0 }
    }
}

/// Errors that can occur while building a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two catalog entries share an id.
    #[error("duplicate catalog link id: {0}")]
    DuplicateId(String),
}

/// Result type for composition.
pub type ComposeResult<T> = Result<T, ComposeError>;
