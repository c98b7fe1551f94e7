//! Configuration loading and merging logic
//!
//! Handles loading configuration from the config file and applying
//! environment variable overrides according to precedence rules.

use super::{paths, schema::Config};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with all layers merged
    ///
    /// Precedence order (highest to lowest):
    /// 1. Environment variable overrides
    /// 2. Root config file
    /// 3. Built-in defaults
    pub fn load() -> Result<Config> {
        let mut config = Self::load_defaults();

        if let Ok(root_config) = Self::load_file(&paths::root_config_path()) {
            config = root_config;
        }

        config = Self::apply_env_overrides(config);

        Ok(config)
    }

    /// Load configuration from a file
    pub fn load_file(path: &PathBuf) -> Result<Config> {
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found: {}", path.display()));
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate configuration by loading and checking for errors
    pub fn validate() -> Result<()> {
        let config = Self::load().context("Failed to load configuration")?;

        url::Url::parse(&config.api.base_url)
            .with_context(|| format!("apiBaseUrl is not a valid URL: {}", config.api.base_url))?;

        if config.api.timeout_secs == 0 {
            return Err(anyhow::anyhow!("api.timeoutSecs must be greater than 0"));
        }

        Ok(())
    }

    /// Load default configuration
    pub fn load_defaults() -> Config {
        Config::default()
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut config: Config) -> Config {
        // TOKENVIEW_API_URL override
        if let Ok(base_url) = std::env::var("TOKENVIEW_API_URL") {
            config.api.base_url = base_url;
        }

        // TOKENVIEW_API_TIMEOUT override
        if let Ok(timeout) = std::env::var("TOKENVIEW_API_TIMEOUT") {
            if let Ok(val) = timeout.parse::<u64>() {
                config.api.timeout_secs = val;
            }
        }

        config
    }

    /// Save configuration to a file
    pub fn save(config: &Config, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            paths::ensure_dir(parent)?;
        }

        let yaml =
            serde_yaml::to_string(config).context("Failed to serialize configuration to YAML")?;

        std::fs::write(path, yaml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Save root configuration
    pub fn save_root(config: &Config) -> Result<()> {
        Self::save(config, &paths::root_config_path())
    }
}
