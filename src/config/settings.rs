//! Client settings and configuration structures.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure containing all client settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Remote API location
    pub api: ApiSettings,

    /// Login credentials used to obtain the bearer token
    pub credentials: CredentialSettings,

    /// Values used when generating new records
    pub identity: IdentitySettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Remote API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    /// Base URL of the API (e.g., "http://localhost:8080")
    pub base_url: String,
}

/// Administrator credentials.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialSettings {
    pub email: String,
    pub password: String,
}

/// Generated record configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct IdentitySettings {
    /// Password assigned to every record the client creates
    pub default_password: String,
}

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. config/default.toml (base configuration)
    /// 2. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 3. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed.
    /// Values are not checked here; call [`Settings::validate`] once command
    /// line overrides have been applied.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        Config::builder()
            .set_default("environment", environment.clone())?
            .set_default("api.base_url", "http://localhost:8080")?
            .set_default("credentials.email", "admin@gmail.com")?
            .set_default("credentials.password", "123456")?
            .set_default("identity.default_password", "senha123")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // APP__API__BASE_URL=http://host:8080 -> api.base_url
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("api.base_url", std::env::var("API_BASE_URL").ok())?
            .set_override_option("credentials.email", std::env::var("ADMIN_EMAIL").ok())?
            .set_override_option("credentials.password", std::env::var("ADMIN_PASSWORD").ok())?
            .build()?
            .try_deserialize()
    }

    /// Check values that `config` cannot check on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api.base_url.as_str();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Message(format!(
                "api.base_url must be an http:// or https:// URL, got {:?}",
                url
            )));
        }
        Ok(())
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }
}
