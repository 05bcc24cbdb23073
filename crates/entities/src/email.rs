//! Admin address book entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An inbox shortcut in the admin's address book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddress {
    /// Unique identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Label shown in the address book.
    pub name: String,
    /// The address itself.
    pub email: String,
    /// Webmail URL opened by the inbox shortcut.
    pub inbox_url: String,
    /// When this record was created.
    pub created_at: DateTime<Utc>,
    /// When this record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl EmailAddress {
    /// Creates a new address book entry.
    pub fn new(
        user_id: Uuid,
        name: impl Into<String>,
        email: impl Into<String>,
        inbox_url: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: name.into(),
            email: email.into(),
            inbox_url: inbox_url.into(),
            created_at: now,
            updated_at: now,
        }
    }
}
