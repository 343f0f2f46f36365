mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod monitor_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use monitor_config::MonitorConfig;

pub const CONFIG_DIR_ENV: &str = "CR_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR: &str = ".cr";
pub const CONFIG_FILENAME: &str = "config.toml";

// Matches the records UI's development backend
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001/api";
pub const DEFAULT_HEALTH_PATH: &str = "/health";

pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 8000;
pub const MIN_PROBE_TIMEOUT_MS: u64 = 100;
pub const MAX_PROBE_TIMEOUT_MS: u64 = 60_000;

pub const DEFAULT_FAST_INTERVAL_SECS: u64 = 5;
pub const MIN_FAST_INTERVAL_SECS: u64 = 1;
pub const MAX_FAST_INTERVAL_SECS: u64 = 300;

pub const DEFAULT_SLOW_INTERVAL_SECS: u64 = 15;
pub const MAX_SLOW_INTERVAL_SECS: u64 = 3600;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
