//! In-memory store implementation for testing and ephemeral runs.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use chrono::Utc;
use entities::{
    CustomLink, CustomLinkUpdate, DayOfWeek, EmailAddress, PreferencesUpdate, TrainingDay, User,
    UserPreferences,
};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{DashboardStore, StoreError, StoreResult};

/// In-memory dashboard store.
#[derive(Debug, Default, Clone)]
pub struct MemoryDashboardStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
    preferences: Arc<RwLock<HashMap<Uuid, UserPreferences>>>,
    custom_links: Arc<RwLock<HashMap<Uuid, CustomLink>>>,
    training_days: Arc<RwLock<HashMap<(Uuid, DayOfWeek), TrainingDay>>>,
    email_addresses: Arc<RwLock<HashMap<Uuid, EmailAddress>>>,
}

impl MemoryDashboardStore {
    /// Creates a new in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DashboardStore for MemoryDashboardStore {
    // =========================================================================
    // User operations
    // =========================================================================

    async fn create_user(&self, user: User) -> StoreResult<User> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(StoreError::already_exists("User", user.email));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    // =========================================================================
    // Preferences operations
    // =========================================================================

    async fn get_preferences(&self, user_id: Uuid) -> StoreResult<Option<UserPreferences>> {
        let preferences = self.preferences.read().await;
        Ok(preferences.get(&user_id).cloned())
    }

    async fn create_preferences(
        &self,
        preferences: UserPreferences,
    ) -> StoreResult<UserPreferences> {
        let mut all = self.preferences.write().await;
        if all.contains_key(&preferences.user_id) {
            return Err(StoreError::already_exists(
                "UserPreferences",
                preferences.user_id.to_string(),
            ));
        }
        all.insert(preferences.user_id, preferences.clone());
        Ok(preferences)
    }

    async fn upsert_preferences(
        &self,
        user_id: Uuid,
        update: PreferencesUpdate,
    ) -> StoreResult<UserPreferences> {
        let mut all = self.preferences.write().await;
        let preferences = all
            .entry(user_id)
            .or_insert_with(|| UserPreferences::new(user_id));

        preferences.enabled_links = update.enabled_links;
        preferences.city = update.city;
        preferences.display_name = update.display_name;
        preferences.updated_at = Utc::now();

        Ok(preferences.clone())
    }

    // =========================================================================
    // Custom link operations
    // =========================================================================

    async fn list_custom_links(&self, user_id: Uuid) -> StoreResult<Vec<CustomLink>> {
        let links = self.custom_links.read().await;
        let mut result: Vec<CustomLink> = links
            .values()
            .filter(|l| l.user_id == user_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(result)
    }

    async fn create_custom_link(&self, link: CustomLink) -> StoreResult<CustomLink> {
        let mut links = self.custom_links.write().await;
        if links.contains_key(&link.id) {
            return Err(StoreError::already_exists("CustomLink", link.id.to_string()));
        }
        links.insert(link.id, link.clone());
        Ok(link)
    }

    async fn update_custom_link(
        &self,
        user_id: Uuid,
        id: Uuid,
        update: CustomLinkUpdate,
    ) -> StoreResult<Option<CustomLink>> {
        let mut links = self.custom_links.write().await;
        let Some(link) = links.get_mut(&id).filter(|l| l.user_id == user_id) else {
            return Ok(None);
        };

        link.title = update.title;
        link.url = update.url;
        link.icon = update.icon;
        link.color = update.color;
        link.gradient = update.gradient;
        link.updated_at = Utc::now();

        Ok(Some(link.clone()))
    }

    async fn delete_custom_link(&self, user_id: Uuid, id: Uuid) -> StoreResult<bool> {
        let mut links = self.custom_links.write().await;
        let owned = links.get(&id).is_some_and(|l| l.user_id == user_id);
        if owned {
            links.remove(&id);
        }
        Ok(owned)
    }

    // =========================================================================
    // Training operations
    // =========================================================================

    async fn list_training_days(&self, user_id: Uuid) -> StoreResult<Vec<TrainingDay>> {
        let days = self.training_days.read().await;
        let mut result: Vec<TrainingDay> = days
            .values()
            .filter(|d| d.user_id == user_id)
            .cloned()
            .collect();
        result.sort_by_key(|d| d.day_of_week);
        Ok(result)
    }

    async fn upsert_training_day(
        &self,
        user_id: Uuid,
        day_of_week: DayOfWeek,
        activity: &str,
    ) -> StoreResult<TrainingDay> {
        let mut days = self.training_days.write().await;
        let day = days
            .entry((user_id, day_of_week))
            .and_modify(|d| {
                d.activity = activity.to_string();
                d.updated_at = Utc::now();
            })
            .or_insert_with(|| TrainingDay::new(user_id, day_of_week, activity));
        Ok(day.clone())
    }

    // =========================================================================
    // Address book operations
    // =========================================================================

    async fn list_email_addresses(&self, user_id: Uuid) -> StoreResult<Vec<EmailAddress>> {
        let addresses = self.email_addresses.read().await;
        let mut result: Vec<EmailAddress> = addresses
            .values()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(result)
    }

    async fn get_email_address(&self, id: Uuid) -> StoreResult<Option<EmailAddress>> {
        let addresses = self.email_addresses.read().await;
        Ok(addresses.get(&id).cloned())
    }

    async fn create_email_address(&self, address: EmailAddress) -> StoreResult<EmailAddress> {
        let mut addresses = self.email_addresses.write().await;
        if addresses.contains_key(&address.id) {
            return Err(StoreError::already_exists(
                "EmailAddress",
                address.id.to_string(),
            ));
        }
        addresses.insert(address.id, address.clone());
        Ok(address)
    }

    async fn update_email_address(&self, address: EmailAddress) -> StoreResult<EmailAddress> {
        let mut addresses = self.email_addresses.write().await;
        if !addresses.contains_key(&address.id) {
            return Err(StoreError::not_found("EmailAddress", address.id.to_string()));
        }
        addresses.insert(address.id, address.clone());
        Ok(address)
    }

    async fn delete_email_address(&self, id: Uuid) -> StoreResult<()> {
        let mut addresses = self.email_addresses.write().await;
        if addresses.remove(&id).is_none() {
            return Err(StoreError::not_found("EmailAddress", id.to_string()));
        }
        Ok(())
    }
}
