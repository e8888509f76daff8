use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::constants::{DEFAULT_API_BASE, DEFAULT_CART_PATH, DEFAULT_TIMEOUT_SECONDS};
use crate::error::{CatalogError, Result};

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub cart: CartConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    pub path: String,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_CART_PATH.to_string(),
        }
    }
}

/// Environment variables that override `api.base_url`, highest priority first.
const API_URL_VARS: [&str; 2] = ["MUSEUM_API_URL", "NEXT_PUBLIC_API_URL"];

impl Config {
    /// Loads `config.toml` (or the file named by `MUSEUM_CONFIG`), falling back to
    /// defaults when the file does not exist, then applies environment overrides.
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();

        let config_path =
            std::env::var("MUSEUM_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
        let mut config = if Path::new(&config_path).exists() {
            Self::from_file(&config_path)?
        } else {
            tracing::debug!(path = %config_path, "no config file, using defaults");
            Config::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    pub fn from_file(config_path: &str) -> Result<Self> {
        let config_content = fs::read_to_string(config_path).map_err(|e| {
            CatalogError::Config(format!(
                "Failed to read config file '{}': {}",
                config_path, e
            ))
        })?;
        Self::from_toml(&config_content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        if config.api.base_url.trim().is_empty() {
            return Err(CatalogError::Config("api.base_url must not be empty".to_string()));
        }
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Some(url) = API_URL_VARS
            .iter()
            .find_map(|name| std::env::var(name).ok())
            .filter(|url| !url.trim().is_empty())
        {
            self.api.base_url = url;
        }
    }
}
