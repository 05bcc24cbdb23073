//! Link card descriptors.

use serde::{Deserialize, Serialize};

/// Special rendering and click behavior of a card.
///
/// Cards without a type are plain external links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkType {
    /// Opens the admin address book.
    Emails,
    /// A user-created link.
    Custom,
    /// Opens the training schedule editor instead of navigating.
    TrainingWeek,
    /// Replaced by a live weather widget.
    Weather,
}

/// A card in the dashboard grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkDescriptor {
    pub id: String,
    pub title: String,
    pub url: String,
    pub icon: String,
    pub color: String,
    pub gradient: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<LinkType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_by_default: Option<bool>,
}

impl LinkDescriptor {
    /// Creates a plain external link. The gradient is derived from the colour.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        let color = color.into();
        Self {
            id: id.into(),
            title: title.into(),
            url: url.into(),
            icon: icon.into(),
            gradient: format!("bg-gradient-to-br {color}"),
            color,
            link_type: None,
            display_by_default: None,
        }
    }

    /// Sets the card type.
    pub fn with_type(mut self, link_type: LinkType) -> Self {
        self.link_type = Some(link_type);
        self
    }
}
