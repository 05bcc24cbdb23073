//! Request bodies.
//!
//! Required fields are modelled as `Option` so that a missing value reaches
//! the handler and is reported as a validation error rather than a
//! deserialization failure.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// Preferences
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePreferencesRequest {
    #[serde(default)]
    pub enabled_links: Vec<String>,
    pub city: Option<String>,
    pub display_name: Option<String>,
}

// ============================================================================
// Custom links
// ============================================================================

/// Body for both creating and replacing a custom link.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomLinkRequest {
    pub title: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub gradient: Option<String>,
}

// ============================================================================
// Training
// ============================================================================

/// Day name to activity name, e.g. `{"monday": "run"}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTrainingWeekRequest {
    pub week: Option<BTreeMap<String, String>>,
}

// ============================================================================
// Address book
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmailAddressRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub inbox_url: Option<String>,
}

/// Blank or missing fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmailAddressRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub inbox_url: Option<String>,
}

// ============================================================================
// Weather
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherQuery {
    pub city: Option<String>,
}
