use crate::{ConfigError, ConfigErrorResult, DEFAULT_API_BASE_URL, DEFAULT_HEALTH_PATH};

use serde::Deserialize;

/// Where the clinical records API lives
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the records API (e.g. "http://localhost:3001/api")
    pub base_url: String,
    /// Path of the health endpoint, appended to `base_url`
    pub health_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_API_BASE_URL),
            health_path: String::from(DEFAULT_HEALTH_PATH),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let base = self.base_url.trim();

        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::api(format!(
                "api.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if base.trim_end_matches('/').ends_with("://") {
            return Err(ConfigError::api(format!(
                "api.base_url has no host, got '{}'",
                self.base_url
            )));
        }

        if !self.health_path.starts_with('/') {
            return Err(ConfigError::api(format!(
                "api.health_path must start with '/', got '{}'",
                self.health_path
            )));
        }

        Ok(())
    }

    /// Full URL of the health endpoint.
    pub fn health_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim().trim_end_matches('/'),
            self.health_path
        )
    }
}
