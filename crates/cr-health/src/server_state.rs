use std::fmt;

use serde::{Deserialize, Serialize};

/// Availability of the records backend, as of the most recent probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerState {
    /// Health endpoint answered 2xx within the timeout
    Online,
    /// Health endpoint answered 5xx (deploy or restart in progress)
    Restarting,
    /// No answer before the timeout (cold start)
    #[default]
    Waking,
    /// Transport failure, or an answer that is neither 2xx nor 5xx
    Offline,
}

impl ServerState {
    /// Classify an HTTP status code received within the timeout.
    pub fn from_status(status: u16) -> Self {
        match status {
            200..=299 => Self::Online,
            500..=u16::MAX => Self::Restarting,
            _ => Self::Offline,
        }
    }

    /// Data views and mutating actions are enabled only when online.
    pub fn is_fully_available(self) -> bool {
        matches!(self, Self::Online)
    }

    /// `waking` and `restarting` resolve on their own; only a hard failure
    /// gets a manual retry.
    pub fn allows_manual_retry(self) -> bool {
        matches!(self, Self::Offline)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Restarting => "restarting",
            Self::Waking => "waking",
            Self::Offline => "offline",
        }
    }
}

impl fmt::Display for ServerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
