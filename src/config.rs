use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

use crate::constants::{
    API_KEY_ENV, DEFAULT_API_BASE_URL, DEFAULT_IMAGE_BASE_URL, DEFAULT_PAGE_SIZE,
};
use crate::utils::AppError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub network: NetworkConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,

    #[serde(default)]
    pub api_key: String,

    /// e.g. `en-US`; the catalog's default when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Seconds.
    #[serde(default = "default_timeout")]
    pub connection_timeout: u64,

    #[serde(default = "default_retries")]
    pub max_retries: u32,

    /// Cached result pages.
    #[serde(default = "default_cache_size")]
    pub cache_size: usize,

    /// Seconds a cached page stays fresh.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Cards per carousel page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Config {
    /// Loads the user config, writing defaults on first run.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            info!("No config file found, using defaults");
            let config = Config::default();
            config.save_to(&config_path)?;
            Ok(config.with_env_overrides())
        }
    }

    /// Loads an explicit config file. A missing file is an error here.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading config from {:?}", path);
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::parse(&contents)?;
        info!("Config loaded successfully");
        Ok(config.with_env_overrides())
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents).context("Failed to parse config file")?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents).context("Failed to write config file")?;

        debug!("Config saved to {:?}", path);
        Ok(())
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.display.page_size == 0 {
            return Err(AppError::Configuration(
                "display.page_size must be at least 1".to_string(),
            ));
        }
        if self.catalog.api_base_url.trim().is_empty() {
            return Err(AppError::Configuration(
                "catalog.api_base_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(key) = std::env::var(API_KEY_ENV)
            && !key.trim().is_empty()
        {
            debug!("Using API key from {}", API_KEY_ENV);
            self.catalog.api_key = key.trim().to_string();
        }
        self
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Failed to get config directory")?;
        Ok(config_dir.join("marquee").join("config.toml"))
    }
}

impl NetworkConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.connection_timeout)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            image_base_url: default_image_base_url(),
            api_key: String::new(),
            language: None,
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            connection_timeout: default_timeout(),
            max_retries: default_retries(),
            cache_size: default_cache_size(),
            cache_ttl: default_cache_ttl(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_image_base_url() -> String {
    DEFAULT_IMAGE_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_retries() -> u32 {
    3
}

fn default_cache_size() -> usize {
    100
}

fn default_cache_ttl() -> u64 {
    300
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}
