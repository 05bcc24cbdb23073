//! SQLite store implementation.

use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use entities::{
    CustomLink, CustomLinkUpdate, DayOfWeek, EmailAddress, PreferencesUpdate, TrainingDay, User,
    UserPreferences,
};
use sqlx::{FromRow, Pool, Sqlite, sqlite::SqlitePoolOptions};
use uuid::Uuid;

use crate::{DashboardStore, StoreError, StoreResult};

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id BLOB PRIMARY KEY,
    email TEXT NOT NULL UNIQUE,
    name TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS user_preferences (
    id BLOB PRIMARY KEY,
    user_id BLOB NOT NULL UNIQUE REFERENCES users(id),
    enabled_links TEXT NOT NULL DEFAULT '[]',
    city TEXT,
    display_name TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS custom_links (
    id BLOB PRIMARY KEY,
    user_id BLOB NOT NULL REFERENCES users(id),
    title TEXT NOT NULL,
    url TEXT NOT NULL,
    icon TEXT NOT NULL,
    color TEXT NOT NULL,
    gradient TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_custom_links_user_id ON custom_links (user_id);

CREATE TABLE IF NOT EXISTS training_days (
    id BLOB PRIMARY KEY,
    user_id BLOB NOT NULL REFERENCES users(id),
    day_of_week TEXT NOT NULL,
    activity TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    UNIQUE (user_id, day_of_week)
);

CREATE TABLE IF NOT EXISTS email_addresses (
    id BLOB PRIMARY KEY,
    user_id BLOB NOT NULL REFERENCES users(id),
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    inbox_url TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_email_addresses_user_id ON email_addresses (user_id);
"#;

/// Maps unique constraint violations to `AlreadyExists`.
fn map_insert_error(entity_type: &'static str, id: impl Into<String>, e: sqlx::Error) -> StoreError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            StoreError::already_exists(entity_type, id)
        }
        _ => StoreError::Database(e),
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    name: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            email: row.email,
            name: row.name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct PreferencesRow {
    id: Uuid,
    user_id: Uuid,
    enabled_links: String,
    city: Option<String>,
    display_name: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PreferencesRow> for UserPreferences {
    type Error = StoreError;

    fn try_from(row: PreferencesRow) -> Result<Self, Self::Error> {
        let enabled_links: BTreeSet<String> = serde_json::from_str(&row.enabled_links)?;
        Ok(UserPreferences {
            id: row.id,
            user_id: row.user_id,
            enabled_links,
            city: row.city,
            display_name: row.display_name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct CustomLinkRow {
    id: Uuid,
    user_id: Uuid,
    title: String,
    url: String,
    icon: String,
    color: String,
    gradient: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CustomLinkRow> for CustomLink {
    fn from(row: CustomLinkRow) -> Self {
        CustomLink {
            id: row.id,
            user_id: row.user_id,
            title: row.title,
            url: row.url,
            icon: row.icon,
            color: row.color,
            gradient: row.gradient,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct TrainingDayRow {
    id: Uuid,
    user_id: Uuid,
    day_of_week: String,
    activity: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TrainingDayRow> for TrainingDay {
    type Error = StoreError;

    fn try_from(row: TrainingDayRow) -> Result<Self, Self::Error> {
        let day_of_week: DayOfWeek = row
            .day_of_week
            .parse()
            .map_err(|e: entities::UnknownDayOfWeek| StoreError::corrupt("TrainingDay", e.to_string()))?;
        Ok(TrainingDay {
            id: row.id,
            user_id: row.user_id,
            day_of_week,
            activity: row.activity,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct EmailAddressRow {
    id: Uuid,
    user_id: Uuid,
    name: String,
    email: String,
    inbox_url: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<EmailAddressRow> for EmailAddress {
    fn from(row: EmailAddressRow) -> Self {
        EmailAddress {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            email: row.email,
            inbox_url: row.inbox_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// SQLite dashboard store.
#[derive(Debug, Clone)]
pub struct SqliteDashboardStore {
    pool: Pool<Sqlite>,
}

impl SqliteDashboardStore {
    /// Creates a store on an existing pool.
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Connects to `database_url` and creates the schema.
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        let store = Self::new(pool);
        store.init().await?;
        Ok(store)
    }

    /// Creates the tables if they do not exist.
    pub async fn init(&self) -> StoreResult<()> {
        sqlx::query(SCHEMA_SQL).execute(&self.pool).await?;
        tracing::debug!("Database schema ready");
        Ok(())
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    async fn get_custom_link(&self, id: Uuid) -> StoreResult<Option<CustomLink>> {
        let row: Option<CustomLinkRow> = sqlx::query_as(
            "SELECT id, user_id, title, url, icon, color, gradient, created_at, updated_at
             FROM custom_links
             WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CustomLink::from))
    }
}

#[async_trait]
impl DashboardStore for SqliteDashboardStore {
    // =========================================================================
    // User operations
    // =========================================================================

    async fn create_user(&self, user: User) -> StoreResult<User> {
        sqlx::query(
            "INSERT INTO users (id, email, name, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.name)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_error("User", user.email.clone(), e))?;

        Ok(user)
    }

    async fn get_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            "SELECT id, email, name, created_at, updated_at
             FROM users
             WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    // =========================================================================
    // Preferences operations
    // =========================================================================

    async fn get_preferences(&self, user_id: Uuid) -> StoreResult<Option<UserPreferences>> {
        let row: Option<PreferencesRow> = sqlx::query_as(
            "SELECT id, user_id, enabled_links, city, display_name, created_at, updated_at
             FROM user_preferences
             WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserPreferences::try_from).transpose()
    }

    async fn create_preferences(
        &self,
        preferences: UserPreferences,
    ) -> StoreResult<UserPreferences> {
        let enabled_links = serde_json::to_string(&preferences.enabled_links)?;

        sqlx::query(
            "INSERT INTO user_preferences
                (id, user_id, enabled_links, city, display_name, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(preferences.id)
        .bind(preferences.user_id)
        .bind(&enabled_links)
        .bind(&preferences.city)
        .bind(&preferences.display_name)
        .bind(preferences.created_at)
        .bind(preferences.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_error("UserPreferences", preferences.user_id.to_string(), e))?;

        Ok(preferences)
    }

    async fn upsert_preferences(
        &self,
        user_id: Uuid,
        update: PreferencesUpdate,
    ) -> StoreResult<UserPreferences> {
        let enabled_links = serde_json::to_string(&update.enabled_links)?;
        let now = Utc::now();

        sqlx::query(
            "INSERT INTO user_preferences
                (id, user_id, enabled_links, city, display_name, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT (user_id) DO UPDATE SET
                enabled_links = excluded.enabled_links,
                city = excluded.city,
                display_name = excluded.display_name,
                updated_at = excluded.updated_at",
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&enabled_links)
        .bind(&update.city)
        .bind(&update.display_name)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        self.get_preferences(user_id)
            .await?
            .ok_or_else(|| StoreError::not_found("UserPreferences", user_id.to_string()))
    }

    // =========================================================================
    // Custom link operations
    // =========================================================================

    async fn list_custom_links(&self, user_id: Uuid) -> StoreResult<Vec<CustomLink>> {
        let rows: Vec<CustomLinkRow> = sqlx::query_as(
            "SELECT id, user_id, title, url, icon, color, gradient, created_at, updated_at
             FROM custom_links
             WHERE user_id = ?
             ORDER BY created_at, id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CustomLink::from).collect())
    }

    async fn create_custom_link(&self, link: CustomLink) -> StoreResult<CustomLink> {
        sqlx::query(
            "INSERT INTO custom_links
                (id, user_id, title, url, icon, color, gradient, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(link.id)
        .bind(link.user_id)
        .bind(&link.title)
        .bind(&link.url)
        .bind(&link.icon)
        .bind(&link.color)
        .bind(&link.gradient)
        .bind(link.created_at)
        .bind(link.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_error("CustomLink", link.id.to_string(), e))?;

        Ok(link)
    }

    async fn update_custom_link(
        &self,
        user_id: Uuid,
        id: Uuid,
        update: CustomLinkUpdate,
    ) -> StoreResult<Option<CustomLink>> {
        let result = sqlx::query(
            "UPDATE custom_links
             SET title = ?, url = ?, icon = ?, color = ?, gradient = ?, updated_at = ?
             WHERE id = ? AND user_id = ?",
        )
        .bind(&update.title)
        .bind(&update.url)
        .bind(&update.icon)
        .bind(&update.color)
        .bind(&update.gradient)
        .bind(Utc::now())
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_custom_link(id).await
    }

    async fn delete_custom_link(&self, user_id: Uuid, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM custom_links WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // =========================================================================
    // Training operations
    // =========================================================================

    async fn list_training_days(&self, user_id: Uuid) -> StoreResult<Vec<TrainingDay>> {
        let rows: Vec<TrainingDayRow> = sqlx::query_as(
            "SELECT id, user_id, day_of_week, activity, created_at, updated_at
             FROM training_days
             WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        let mut days = rows
            .into_iter()
            .map(TrainingDay::try_from)
            .collect::<StoreResult<Vec<_>>>()?;
        days.sort_by_key(|d| d.day_of_week);
        Ok(days)
    }

    async fn upsert_training_day(
        &self,
        user_id: Uuid,
        day_of_week: DayOfWeek,
        activity: &str,
    ) -> StoreResult<TrainingDay> {
        let now = Utc::now();

        sqlx::query(
            "INSERT INTO training_days (id, user_id, day_of_week, activity, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)
             ON CONFLICT (user_id, day_of_week) DO UPDATE SET
                activity = excluded.activity,
                updated_at = excluded.updated_at",
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(day_of_week.as_str())
        .bind(activity)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        let row: TrainingDayRow = sqlx::query_as(
            "SELECT id, user_id, day_of_week, activity, created_at, updated_at
             FROM training_days
             WHERE user_id = ? AND day_of_week = ?",
        )
        .bind(user_id)
        .bind(day_of_week.as_str())
        .fetch_one(&self.pool)
        .await?;

        TrainingDay::try_from(row)
    }

    // =========================================================================
    // Address book operations
    // =========================================================================

    async fn list_email_addresses(&self, user_id: Uuid) -> StoreResult<Vec<EmailAddress>> {
        let rows: Vec<EmailAddressRow> = sqlx::query_as(
            "SELECT id, user_id, name, email, inbox_url, created_at, updated_at
             FROM email_addresses
             WHERE user_id = ?
             ORDER BY created_at, id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(EmailAddress::from).collect())
    }

    async fn get_email_address(&self, id: Uuid) -> StoreResult<Option<EmailAddress>> {
        let row: Option<EmailAddressRow> = sqlx::query_as(
            "SELECT id, user_id, name, email, inbox_url, created_at, updated_at
             FROM email_addresses
             WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(EmailAddress::from))
    }

    async fn create_email_address(&self, address: EmailAddress) -> StoreResult<EmailAddress> {
        sqlx::query(
            "INSERT INTO email_addresses
                (id, user_id, name, email, inbox_url, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(address.id)
        .bind(address.user_id)
        .bind(&address.name)
        .bind(&address.email)
        .bind(&address.inbox_url)
        .bind(address.created_at)
        .bind(address.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_error("EmailAddress", address.id.to_string(), e))?;

        Ok(address)
    }

    async fn update_email_address(&self, address: EmailAddress) -> StoreResult<EmailAddress> {
        let result = sqlx::query(
            "UPDATE email_addresses
             SET name = ?, email = ?, inbox_url = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(&address.name)
        .bind(&address.email)
        .bind(&address.inbox_url)
        .bind(address.updated_at)
        .bind(address.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("EmailAddress", address.id.to_string()));
        }
        Ok(address)
    }

    async fn delete_email_address(&self, id: Uuid) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM email_addresses WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("EmailAddress", id.to_string()));
        }
        Ok(())
    }
}
