//! Top-level application configuration.
//!
//! Configuration is stored in `.catalog/config.yaml` and includes:
//! - The base URL of the catalog API
//! - How long transient notifications stay visible

use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{CatalogError, Result};
use crate::paths::catalog_root;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Environment variable that overrides `api.base_url`
pub const BASE_URL_ENV: &str = "CATALOG_API_URL";

/// Keys accepted by `config get` / `config set`
pub const VALID_KEYS: &[&str] = &["api.base_url", "notification.dismiss_after_ms"];

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "ApiConfig::is_default")]
    pub api: ApiConfig,

    #[serde(default, skip_serializing_if = "NotificationConfig::is_default")]
    pub notification: NotificationConfig,
}

/// Catalog API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ApiConfig {
    pub fn is_default(&self) -> bool {
        self.base_url == DEFAULT_BASE_URL
    }
}

/// Transient notification settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Auto-dismiss delay in milliseconds (default: 3000)
    #[serde(default = "default_dismiss_after_ms")]
    pub dismiss_after_ms: u64,
}

fn default_dismiss_after_ms() -> u64 {
    3000
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            dismiss_after_ms: default_dismiss_after_ms(),
        }
    }
}

impl NotificationConfig {
    pub fn is_default(&self) -> bool {
        self.dismiss_after_ms == default_dismiss_after_ms()
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        catalog_root().join("config.yaml")
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            CatalogError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Get the API base URL from the environment or config file
    pub fn base_url(&self) -> Result<Url> {
        if let Ok(url) = env::var(BASE_URL_ENV)
            && !url.is_empty()
        {
            return parse_base_url(&url);
        }

        parse_base_url(&self.api.base_url)
    }

    /// Set the API base URL, rejecting anything that is not an http(s) URL
    pub fn set_base_url(&mut self, url: &str) -> Result<()> {
        parse_base_url(url)?;
        self.api.base_url = url.trim_end_matches('/').to_string();
        Ok(())
    }

    pub fn dismiss_after(&self) -> Duration {
        Duration::from_millis(self.notification.dismiss_after_ms)
    }

    /// Read a value by its dotted key
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "api.base_url" => Ok(self.api.base_url.clone()),
            "notification.dismiss_after_ms" => Ok(self.notification.dismiss_after_ms.to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Write a value by its dotted key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api.base_url" => self.set_base_url(value),
            "notification.dismiss_after_ms" => {
                let ms: u64 = value.parse().map_err(|_| {
                    CatalogError::Config(format!(
                        "invalid value '{value}' for {key}: expected milliseconds"
                    ))
                })?;
                self.notification.dismiss_after_ms = ms;
                Ok(())
            }
            _ => Err(unknown_key(key)),
        }
    }
}

fn unknown_key(key: &str) -> CatalogError {
    CatalogError::Config(format!(
        "unknown config key '{key}'. Valid keys: {}",
        VALID_KEYS.join(", ")
    ))
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(CatalogError::Config(format!(
            "unsupported scheme '{other}' in base URL, expected http or https"
        ))),
    }
}
