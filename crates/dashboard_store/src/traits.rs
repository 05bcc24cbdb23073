//! Store trait definitions.

use async_trait::async_trait;
use entities::{
    CustomLink, CustomLinkUpdate, DayOfWeek, EmailAddress, PreferencesUpdate, TrainingDay,
    TrainingWeek, User, UserPreferences,
};
use uuid::Uuid;

use crate::StoreResult;

/// Preferences as seen by a reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferencesState {
    pub preferences: UserPreferences,
    /// True iff the record existed before this read.
    pub has_set_preferences: bool,
}

/// Trait for dashboard storage operations.
///
/// Uniqueness constraints are the only consistency mechanism: one user per
/// email, one preferences record per user, one training day per user and
/// weekday.
#[async_trait]
pub trait DashboardStore: Send + Sync {
    // =========================================================================
    // User operations
    // =========================================================================

    /// Creates a new user. Fails with `AlreadyExists` if the email is taken.
    async fn create_user(&self, user: User) -> StoreResult<User>;

    /// Gets a user by email.
    async fn get_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// Gets the user for a session email, creating it on first sight.
    async fn get_or_create_user(&self, email: &str, name: Option<&str>) -> StoreResult<User> {
        if let Some(user) = self.get_user_by_email(email).await? {
            return Ok(user);
        }

        let mut user = User::new(email);
        user.name = name.map(str::to_string);

        match self.create_user(user).await {
            Ok(user) => {
                tracing::info!(user_id = %user.id, "User created");
                Ok(user)
            }
            // Lost a race against a concurrent first request.
            Err(e) if e.is_already_exists() => self
                .get_user_by_email(email)
                .await?
                .ok_or_else(|| crate::StoreError::not_found("User", email)),
            Err(e) => Err(e),
        }
    }

    // =========================================================================
    // Preferences operations
    // =========================================================================

    /// Gets a user's preferences.
    async fn get_preferences(&self, user_id: Uuid) -> StoreResult<Option<UserPreferences>>;

    /// Creates a preferences record. Fails with `AlreadyExists` if the user
    /// already has one.
    async fn create_preferences(&self, preferences: UserPreferences)
        -> StoreResult<UserPreferences>;

    /// Replaces enabled links, city and display name in one upsert.
    async fn upsert_preferences(
        &self,
        user_id: Uuid,
        update: PreferencesUpdate,
    ) -> StoreResult<UserPreferences>;

    /// Reads preferences, creating an empty record on the first read.
    ///
    /// `has_set_preferences` is false when this call created the record.
    async fn read_preferences(&self, user_id: Uuid) -> StoreResult<PreferencesState> {
        if let Some(preferences) = self.get_preferences(user_id).await? {
            return Ok(PreferencesState {
                preferences,
                has_set_preferences: true,
            });
        }

        match self.create_preferences(UserPreferences::new(user_id)).await {
            Ok(preferences) => Ok(PreferencesState {
                preferences,
                has_set_preferences: false,
            }),
            Err(e) if e.is_already_exists() => {
                let preferences = self
                    .get_preferences(user_id)
                    .await?
                    .ok_or_else(|| crate::StoreError::not_found("UserPreferences", user_id.to_string()))?;
                Ok(PreferencesState {
                    preferences,
                    has_set_preferences: true,
                })
            }
            Err(e) => Err(e),
        }
    }

    // =========================================================================
    // Custom link operations
    // =========================================================================

    /// Lists a user's custom links, oldest first.
    async fn list_custom_links(&self, user_id: Uuid) -> StoreResult<Vec<CustomLink>>;

    /// Creates a custom link.
    async fn create_custom_link(&self, link: CustomLink) -> StoreResult<CustomLink>;

    /// Updates a custom link owned by `user_id`.
    ///
    /// Returns `None` when no link with that id belongs to the user.
    async fn update_custom_link(
        &self,
        user_id: Uuid,
        id: Uuid,
        update: CustomLinkUpdate,
    ) -> StoreResult<Option<CustomLink>>;

    /// Deletes a custom link owned by `user_id`. Returns false when nothing
    /// was deleted.
    async fn delete_custom_link(&self, user_id: Uuid, id: Uuid) -> StoreResult<bool>;

    // =========================================================================
    // Training operations
    // =========================================================================

    /// Lists the stored schedule entries of a user. May be partial.
    async fn list_training_days(&self, user_id: Uuid) -> StoreResult<Vec<TrainingDay>>;

    /// Creates or updates the entry for one weekday.
    async fn upsert_training_day(
        &self,
        user_id: Uuid,
        day_of_week: DayOfWeek,
        activity: &str,
    ) -> StoreResult<TrainingDay>;

    /// Reads a user's schedule as a complete week.
    async fn read_training_week(&self, user_id: Uuid) -> StoreResult<TrainingWeek> {
        let days = self.list_training_days(user_id).await?;
        Ok(TrainingWeek::complete(days))
    }

    // =========================================================================
    // Address book operations
    // =========================================================================

    /// Lists a user's address book entries, oldest first.
    async fn list_email_addresses(&self, user_id: Uuid) -> StoreResult<Vec<EmailAddress>>;

    /// Gets an address book entry by ID.
    async fn get_email_address(&self, id: Uuid) -> StoreResult<Option<EmailAddress>>;

    /// Creates an address book entry.
    async fn create_email_address(&self, address: EmailAddress) -> StoreResult<EmailAddress>;

    /// Updates an address book entry.
    async fn update_email_address(&self, address: EmailAddress) -> StoreResult<EmailAddress>;

    /// Deletes an address book entry.
    async fn delete_email_address(&self, id: Uuid) -> StoreResult<()>;
}
