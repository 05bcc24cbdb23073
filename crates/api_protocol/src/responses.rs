//! Response bodies.

use entities::{DayOfWeek, LinkDescriptor, TrainingWeek};
use serde::{Deserialize, Serialize};

use crate::types::*;

// ============================================================================
// Auth
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserResponse {
    pub user: User,
    pub is_admin: bool,
}

// ============================================================================
// Links and dashboard
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableLinksResponse {
    pub available_links: Vec<LinkDescriptor>,
}

/// Everything the start page needs to render in one round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    /// Cards in grid order.
    pub cards: Vec<LinkDescriptor>,
    pub greeting: String,
    pub gradient_class: String,
    pub quote: Quote,
    pub city: Option<String>,
    pub display_name: Option<String>,
    pub is_admin: bool,
    pub today: DayOfWeek,
}

// ============================================================================
// Preferences
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesResponse {
    pub enabled_links: Vec<String>,
    pub city: Option<String>,
    pub display_name: Option<String>,
    pub has_set_preferences: bool,
}

// ============================================================================
// Custom links
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomLinksResponse {
    pub custom_links: Vec<CustomLink>,
}

// ============================================================================
// Training
// ============================================================================

/// The full seven-day schedule, keyed by lowercase day name.
pub type TrainingWeekResponse = TrainingWeek;

// ============================================================================
// Address book
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailAddressesResponse {
    pub email_addresses: Vec<EmailAddress>,
}

// ============================================================================
// Shared
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

impl DeleteResponse {
    /// Creates a delete confirmation.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
