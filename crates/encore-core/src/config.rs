//! Application configuration, loaded from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Runtime environment (development or production)
//! - `[display]` - Default density
//! - `[api]` - Encore backend location and credentials
//! - `[billing]` - Subscription price and payment processor settings
//!
//! # Path Resolution
//!
//! 1. Use [`load_from_path`] / [`save_to_path`] with an explicit path
//! 2. Set `ENCORE_CONFIG_DIR`
//! 3. Falls back to the platform config directory
//!
//! A missing file yields defaults. `ENCORE_AUTH_TOKEN` overrides
//! `api.auth_token`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::density::DensityMode;
use crate::error::EncoreResult;

const CONFIG_FILE: &str = "settings.toml";

/// Overrides the directory holding `settings.toml`.
pub const CONFIG_DIR_ENV: &str = "ENCORE_CONFIG_DIR";

/// Overrides `api.auth_token`.
pub const AUTH_TOKEN_ENV: &str = "ENCORE_AUTH_TOKEN";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8787";
pub const DEFAULT_SUBSCRIPTION_PATH: &str = "/api/create-subscription";
pub const DEFAULT_PRICE_ID: &str = "price_pro_monthly";
pub const DEFAULT_PROCESSOR_BASE_URL: &str = "https://api.stripe.com";
pub const DEFAULT_SUCCESS_ROUTE: &str = "/billing/success";

/// Build/runtime environment. Instrumentation is skipped in development.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralConfig {
    pub environment: Environment,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub density: DensityMode,
}

/// Encore backend settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub subscription_path: String,
    /// Bearer token for the signed-in user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            subscription_path: DEFAULT_SUBSCRIPTION_PATH.to_string(),
            auth_token: None,
        }
    }
}

/// Subscription and payment processor settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BillingConfig {
    pub price_id: String,
    /// Without it, checkout reports the processor as not ready
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publishable_key: Option<String>,
    pub processor_base_url: String,
    pub success_route: String,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            price_id: DEFAULT_PRICE_ID.to_string(),
            publishable_key: None,
            processor_base_url: DEFAULT_PROCESSOR_BASE_URL.to_string(),
            success_route: DEFAULT_SUCCESS_ROUTE.to_string(),
        }
    }
}

/// Whole application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub display: DisplayConfig,
    pub api: ApiConfig,
    pub billing: BillingConfig,
}

impl AppConfig {
    /// Full URL of the subscription-creation endpoint.
    pub fn subscription_endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.api.base_url.trim_end_matches('/'),
            self.api.subscription_path.trim_start_matches('/')
        )
    }

    /// Auth token, with `ENCORE_AUTH_TOKEN` taking precedence.
    pub fn auth_token(&self) -> Option<String> {
        self.auth_token_with(std::env::var(AUTH_TOKEN_ENV).ok())
    }

    fn auth_token_with(&self, env_token: Option<String>) -> Option<String> {
        let present = |t: &String| !t.trim().is_empty();
        env_token
            .filter(present)
            .or_else(|| self.api.auth_token.clone().filter(present))
    }

    pub fn publishable_key(&self) -> Option<&str> {
        self.billing
            .publishable_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
    }
}

/// Default location of `settings.toml`.
pub fn config_path() -> PathBuf {
    let dir = std::env::var_os(CONFIG_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("encore")
        });
    dir.join(CONFIG_FILE)
}

pub fn load() -> EncoreResult<AppConfig> {
    load_from_path(&config_path())
}

pub fn load_from_path(path: &Path) -> EncoreResult<AppConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        return Ok(AppConfig::default());
    }
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_to_path(config: &AppConfig, path: &Path) -> EncoreResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml::to_string_pretty(config)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_from_path(&temp.path().join("settings.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.general.environment, Environment::Production);
        assert_eq!(config.display.density, DensityMode::Comfortable);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        fs::write(
            &path,
            r#"
[general]
environment = "development"

[display]
density = "compact"

[billing]
publishable_key = "pk_test_123"
"#,
        )
        .unwrap();

        let config = load_from_path(&path).unwrap();
        assert!(config.general.environment.is_development());
        assert_eq!(config.display.density, DensityMode::Compact);
        assert_eq!(config.publishable_key(), Some("pk_test_123"));
        assert_eq!(config.billing.price_id, DEFAULT_PRICE_ID);
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn save_then_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("settings.toml");
        let mut config = AppConfig::default();
        config.api.auth_token = Some("tok".to_string());
        save_to_path(&config, &path).unwrap();
        assert_eq!(load_from_path(&path).unwrap(), config);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        fs::write(&path, "[display\ndensity = ").unwrap();
        assert!(load_from_path(&path).is_err());
    }

    #[test]
    fn subscription_endpoint_joins_cleanly() {
        let mut config = AppConfig::default();
        config.api.base_url = "https://api.encore.fm/".to_string();
        assert_eq!(
            config.subscription_endpoint(),
            "https://api.encore.fm/api/create-subscription"
        );
    }

    #[test]
    fn env_token_overrides_config() {
        let mut config = AppConfig::default();
        config.api.auth_token = Some("from-file".to_string());
        assert_eq!(config.auth_token_with(None).as_deref(), Some("from-file"));
        assert_eq!(
            config.auth_token_with(Some("from-env".to_string())).as_deref(),
            Some("from-env")
        );

        config.api.auth_token = Some("   ".to_string());
        assert_eq!(config.auth_token_with(None), None);
    }

    #[test]
    fn blank_env_token_falls_back_to_config() {
        let mut config = AppConfig::default();
        config.api.auth_token = Some("from-file".to_string());
        assert_eq!(
            config.auth_token_with(Some(String::new())).as_deref(),
            Some("from-file")
        );
        assert_eq!(
            config.auth_token_with(Some("  ".to_string())).as_deref(),
            Some("from-file")
        );
    }
}
