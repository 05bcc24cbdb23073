//! User-created links.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default colour of a custom link card.
pub const DEFAULT_CUSTOM_LINK_COLOR: &str = "from-gray-500 to-gray-600";

/// Default gradient of a custom link card.
pub const DEFAULT_CUSTOM_LINK_GRADIENT: &str = "bg-gradient-to-br from-gray-500 to-gray-600";

/// A link created by a user. Only its owner may edit or delete it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomLink {
    /// Unique identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    pub title: String,
    pub url: String,
    pub icon: String,
    pub color: String,
    pub gradient: String,
    /// When this record was created.
    pub created_at: DateTime<Utc>,
    /// When this record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl CustomLink {
    /// Creates a new custom link with the default colours.
    pub fn new(
        user_id: Uuid,
        title: impl Into<String>,
        url: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            title: title.into(),
            url: url.into(),
            icon: icon.into(),
            color: DEFAULT_CUSTOM_LINK_COLOR.to_string(),
            gradient: DEFAULT_CUSTOM_LINK_GRADIENT.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the colour classes, keeping the defaults for blank values.
    pub fn with_colors(mut self, color: Option<String>, gradient: Option<String>) -> Self {
        if let Some(color) = color.filter(|c| !c.trim().is_empty()) {
            self.color = color;
        }
        if let Some(gradient) = gradient.filter(|g| !g.trim().is_empty()) {
            self.gradient = gradient;
        }
        self
    }
}

/// Replacement fields for an existing custom link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomLinkUpdate {
    pub title: String,
    pub url: String,
    pub icon: String,
    pub color: String,
    pub gradient: String,
}
