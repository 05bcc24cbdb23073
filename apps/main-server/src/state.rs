//! Application state.

use std::sync::Arc;

use auth::{AdminPolicy, JwtManager};
use dashboard_store::DashboardStore;
use link_composer::{Catalog, CatalogError, LinkComposer};

use crate::config::Config;
use crate::services::weather::WeatherProvider;

/// Shared application state.
pub struct AppState<S: DashboardStore> {
    /// Server configuration.
    pub config: Config,
    /// Dashboard store.
    pub store: S,
    /// JWT manager (absent in single-user mode).
    pub jwt_manager: Option<JwtManager>,
    /// Admin policy shared by the composer and the address book.
    pub admin_policy: AdminPolicy,
    /// Static link catalog.
    pub catalog: Catalog,
    /// Weather provider.
    pub weather: Arc<dyn WeatherProvider>,
}

impl<S: DashboardStore> AppState<S> {
    /// Creates new application state.
    ///
    /// Fails if the built-in catalog has duplicate link ids.
    pub fn new(
        config: Config,
        store: S,
        jwt_manager: Option<JwtManager>,
        weather: Arc<dyn WeatherProvider>,
    ) -> Result<Self, CatalogError> {
        let admin_policy = AdminPolicy::new(config.admin_email.clone());
        Ok(Self {
            config,
            store,
            jwt_manager,
            admin_policy,
            catalog: Catalog::builtin()?,
            weather,
        })
    }

    /// Returns true if authentication is enabled.
    pub fn auth_enabled(&self) -> bool {
        self.config.auth_enabled()
    }

    /// Returns true if `email` is the admin.
    pub fn is_admin(&self, email: &str) -> bool {
        self.admin_policy.is_admin(Some(email))
    }

    /// Returns a composer bound to this state's catalog and admin policy.
    pub fn composer(&self) -> LinkComposer<'_> {
        LinkComposer::new(&self.catalog, &self.admin_policy)
    }
}

/// Type alias for shared state.
pub type SharedState<S> = Arc<AppState<S>>;

/// Creates shared state from config, store and weather provider.
pub fn create_shared_state<S: DashboardStore>(
    config: Config,
    store: S,
    jwt_manager: Option<JwtManager>,
    weather: Arc<dyn WeatherProvider>,
) -> Result<SharedState<S>, CatalogError> {
    AppState::new(config, store, jwt_manager, weather).map(Arc::new)
}
