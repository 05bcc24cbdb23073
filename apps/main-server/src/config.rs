//! Server configuration.

use std::env;

/// `DATABASE_URL` value that selects the in-memory store.
pub const MEMORY_DATABASE_URL: &str = "memory";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// SQLite URL, or `memory` for the in-memory store.
    pub database_url: String,
    /// Whether every request acts as the local user.
    pub single_user_mode: bool,
    /// Identity used in single-user mode.
    pub local_user_email: String,
    /// Display name used in single-user mode.
    pub local_user_name: Option<String>,
    /// JWT secret (required unless in single-user mode).
    pub jwt_secret: Option<String>,
    /// JWT expiration in hours.
    pub jwt_expiration_hours: u64,
    /// The single admin email. Empty means no admin.
    pub admin_email: Option<String>,
    /// Base URL of the weather provider.
    pub weather_api_url: String,
    /// Log level.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            database_url: "sqlite:startpage.db?mode=rwc".to_string(),
            single_user_mode: false,
            local_user_email: "local@localhost".to_string(),
            local_user_name: None,
            jwt_secret: None,
            jwt_expiration_hours: auth::DEFAULT_JWT_EXPIRATION_HOURS,
            admin_email: None,
            weather_api_url: "https://www.cereal.sh".to_string(),
            log_level: "info".to_string(),
        }
    }
}

fn env_flag(name: &str) -> Option<bool> {
    env::var(name)
        .ok()
        .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let single_user_mode =
            env_flag("STARTPAGE_SINGLE_USER_MODE").unwrap_or(defaults.single_user_mode);

        let jwt_secret = env::var("STARTPAGE_JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty());
        if !single_user_mode && jwt_secret.is_none() {
            anyhow::bail!("STARTPAGE_JWT_SECRET is required unless single-user mode is enabled");
        }

        let port = match env::var("STARTPAGE_SERVER_PORT") {
            Ok(v) => v
                .parse()
                .map_err(|_| anyhow::anyhow!("STARTPAGE_SERVER_PORT is not a valid port: {v}"))?,
            Err(_) => defaults.port,
        };

        Ok(Self {
            host: env::var("STARTPAGE_SERVER_HOST").unwrap_or(defaults.host),
            port,
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            single_user_mode,
            local_user_email: env::var("STARTPAGE_LOCAL_USER_EMAIL")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.local_user_email),
            local_user_name: env::var("STARTPAGE_LOCAL_USER_NAME")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            jwt_secret,
            jwt_expiration_hours: env::var("STARTPAGE_JWT_EXPIRATION_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.jwt_expiration_hours),
            admin_email: env::var("STARTPAGE_ADMIN_EMAIL").ok(),
            weather_api_url: env::var("STARTPAGE_WEATHER_API_URL")
                .unwrap_or(defaults.weather_api_url),
            log_level: env::var("STARTPAGE_LOG_LEVEL").unwrap_or(defaults.log_level),
        })
    }

    /// Returns the server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns true if requests must carry a token.
    pub fn auth_enabled(&self) -> bool {
        !self.single_user_mode
    }

    /// Returns true if the in-memory store was requested.
    pub fn uses_memory_store(&self) -> bool {
        self.database_url == MEMORY_DATABASE_URL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "STARTPAGE_SERVER_HOST",
        "STARTPAGE_SERVER_PORT",
        "DATABASE_URL",
        "STARTPAGE_SINGLE_USER_MODE",
        "STARTPAGE_LOCAL_USER_EMAIL",
        "STARTPAGE_LOCAL_USER_NAME",
        "STARTPAGE_JWT_SECRET",
        "STARTPAGE_JWT_EXPIRATION_HOURS",
        "STARTPAGE_ADMIN_EMAIL",
        "STARTPAGE_WEATHER_API_URL",
        "STARTPAGE_LOG_LEVEL",
    ];

    fn clear_env() {
        // SAFETY: every test touching the environment is #[serial]
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    #[serial]
    fn test_secret_required_in_multi_user_mode() {
        clear_env();

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("STARTPAGE_JWT_SECRET"));
    }

    #[test]
    #[serial]
    fn test_single_user_defaults() {
        clear_env();
        unsafe {
            env::set_var("STARTPAGE_SINGLE_USER_MODE", "true");
        }

        let config = Config::from_env().unwrap();
        assert!(config.single_user_mode);
        assert!(!config.auth_enabled());
        assert_eq!(config.port, 3000);
        assert_eq!(config.local_user_email, "local@localhost");
        assert_eq!(config.weather_api_url, "https://www.cereal.sh");
        assert!(!config.uses_memory_store());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        unsafe {
            env::set_var("STARTPAGE_JWT_SECRET", "secret");
            env::set_var("STARTPAGE_SERVER_PORT", "8080");
            env::set_var("DATABASE_URL", "memory");
            env::set_var("STARTPAGE_ADMIN_EMAIL", "admin@example.com");
            env::set_var("STARTPAGE_JWT_EXPIRATION_HOURS", "2");
        }

        let config = Config::from_env().unwrap();
        assert!(config.auth_enabled());
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert!(config.uses_memory_store());
        assert_eq!(config.admin_email.as_deref(), Some("admin@example.com"));
        assert_eq!(config.jwt_expiration_hours, 2);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_rejected() {
        clear_env();
        unsafe {
            env::set_var("STARTPAGE_SINGLE_USER_MODE", "1");
            env::set_var("STARTPAGE_SERVER_PORT", "not-a-port");
        }

        assert!(Config::from_env().is_err());

        clear_env();
    }
}
