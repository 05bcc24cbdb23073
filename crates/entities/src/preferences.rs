//! Per-user dashboard preferences.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Dashboard preferences of a user. At most one record exists per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Unique identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Catalog link ids the user wants to see. Membership only, no ordering.
    pub enabled_links: BTreeSet<String>,
    /// City used by the weather card.
    pub city: Option<String>,
    /// Name used by the greeting, overriding the session name.
    pub display_name: Option<String>,
    /// When this record was created.
    pub created_at: DateTime<Utc>,
    /// When this record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl UserPreferences {
    /// Creates an empty preferences record for a user.
    pub fn new(user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            enabled_links: BTreeSet::new(),
            city: None,
            display_name: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the enabled links.
    pub fn with_enabled_links<I, T>(mut self, links: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.enabled_links = links.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the weather city.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }
}

/// The fields replaced by a preferences write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferencesUpdate {
    pub enabled_links: BTreeSet<String>,
    pub city: Option<String>,
    pub display_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_preferences_are_empty() {
        let user_id = Uuid::new_v4();
        let prefs = UserPreferences::new(user_id);

        assert_eq!(prefs.user_id, user_id);
        assert!(prefs.enabled_links.is_empty());
        assert!(prefs.city.is_none());
        assert!(prefs.display_name.is_none());
    }

    #[test]
    fn test_enabled_links_deduplicate() {
        let prefs = UserPreferences::new(Uuid::new_v4())
            .with_enabled_links(["google", "github", "google"])
            .with_city("sydney");

        assert_eq!(prefs.enabled_links.len(), 2);
        assert!(prefs.enabled_links.contains("github"));
        assert_eq!(prefs.city.as_deref(), Some("sydney"));
    }
}
