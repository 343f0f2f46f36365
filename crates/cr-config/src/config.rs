use crate::{
    ApiConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, LoggingConfig, MonitorConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub monitor: MonitorConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for CR_CONFIG_DIR env var, else use ./.cr/
    /// 2. Load config.toml from that directory if it exists, else use defaults
    /// 3. Apply CR_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: CR_CONFIG_DIR env var > ./.cr/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.monitor.validate()?;
        Ok(())
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  api: {}", self.api.health_url());
        info!(
            "  monitor: timeout={}ms, fast={}s, slow={}s",
            self.monitor.probe_timeout_ms,
            self.monitor.fast_interval_secs,
            self.monitor.slow_interval_secs
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_string("CR_API_BASE_URL", &mut self.api.base_url);
        Self::apply_env_string("CR_HEALTH_PATH", &mut self.api.health_path);

        // Monitor
        Self::apply_env_parse("CR_PROBE_TIMEOUT_MS", &mut self.monitor.probe_timeout_ms);
        Self::apply_env_parse(
            "CR_FAST_INTERVAL_SECS",
            &mut self.monitor.fast_interval_secs,
        );
        Self::apply_env_parse(
            "CR_SLOW_INTERVAL_SECS",
            &mut self.monitor.slow_interval_secs,
        );

        // Logging
        Self::apply_env_parse("CR_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("CR_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("CR_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
