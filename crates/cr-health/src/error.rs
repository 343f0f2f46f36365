use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Construction and lifecycle failures.
///
/// Probe outcomes are never errors; they are classified into a `ServerState`.
#[derive(Error, Debug)]
pub enum HealthError {
    #[error("Failed to build HTTP client: {source} {location}")]
    ClientBuild {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("Invalid health URL '{url}': {message} {location}")]
    InvalidUrl {
        url: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Availability monitor is already running {location}")]
    AlreadyRunning { location: ErrorLocation },
}

impl HealthError {
    #[track_caller]
    pub fn invalid_url<S: Into<String>>(url: &str, message: S) -> Self {
        Self::InvalidUrl {
            url: url.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn already_running() -> Self {
        Self::AlreadyRunning {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for HealthError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::ClientBuild {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, HealthError>;
