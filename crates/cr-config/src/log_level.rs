use crate::{DEFAULT_LOG_LEVEL, DEFAULT_LOG_LEVEL_STRING};

use std::ops::Deref;
use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Deserializer};

/// Wrapper for LevelFilter with lenient deserialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel(pub LevelFilter);

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel(DEFAULT_LOG_LEVEL)
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)
            .unwrap_or_else(|_| String::from(DEFAULT_LOG_LEVEL_STRING));

        Ok(LogLevel::from_str(&s).unwrap_or_default())
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(log_level: LogLevel) -> Self {
        log_level.0
    }
}

impl Deref for LogLevel {
    type Target = LevelFilter;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for LogLevel {
    type Err = ();

    /// Unknown names fall back to `info` rather than failing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "off" => Ok(LogLevel(LevelFilter::Off)),
            "error" => Ok(LogLevel(LevelFilter::Error)),
            "warn" => Ok(LogLevel(LevelFilter::Warn)),
            "info" => Ok(LogLevel(LevelFilter::Info)),
            "debug" => Ok(LogLevel(LevelFilter::Debug)),
            "trace" => Ok(LogLevel(LevelFilter::Trace)),
            _ => Ok(LogLevel::default()),
        }
    }
}
