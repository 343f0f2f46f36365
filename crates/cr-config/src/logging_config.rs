use crate::{DEFAULT_LOG_COLORED, LogLevel};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Colored stderr output (ignored when logging to a file)
    pub colored: bool,
    /// Append logs to this file instead of stderr
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            colored: DEFAULT_LOG_COLORED,
            file: None,
        }
    }
}
