use cr_config::ConfigError;
use cr_health::HealthError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that stop a `crh` command before it can report a state
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {source} {location}")]
    Config {
        #[source]
        source: ConfigError,
        location: ErrorLocation,
    },

    #[error("Monitor error: {source} {location}")]
    Health {
        #[source]
        source: HealthError,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error: {message} {location}")]
    Io {
        message: String,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl CliError {
    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ConfigError> for CliError {
    #[track_caller]
    fn from(source: ConfigError) -> Self {
        CliError::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<HealthError> for CliError {
    #[track_caller]
    fn from(source: HealthError) -> Self {
        CliError::Health {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for CliError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        CliError::Io {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        CliError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
