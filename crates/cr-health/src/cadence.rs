use crate::ServerState;

use std::fmt;
use std::time::Duration;

use cr_config::{DEFAULT_FAST_INTERVAL_SECS, DEFAULT_SLOW_INTERVAL_SECS};

/// How often the monitor probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cadence {
    /// A cold start or restart may finish any moment
    #[default]
    Fast,
    /// Stable success or confirmed hard failure
    Slow,
}

impl Cadence {
    /// Cadence after observing `result`.
    ///
    /// Offline always backs off. Online backs off from fast. Waking and
    /// restarting keep whatever cadence is current.
    pub fn next(self, result: ServerState) -> Self {
        match (self, result) {
            (_, ServerState::Offline) => Cadence::Slow,
            (Cadence::Fast, ServerState::Online) => Cadence::Slow,
            (current, _) => current,
        }
    }

    pub fn interval(self, intervals: &PollIntervals) -> Duration {
        match self {
            Cadence::Fast => intervals.fast,
            Cadence::Slow => intervals.slow,
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cadence::Fast => f.write_str("fast"),
            Cadence::Slow => f.write_str("slow"),
        }
    }
}

/// Interval lengths for each cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollIntervals {
    pub fast: Duration,
    pub slow: Duration,
}

impl Default for PollIntervals {
    fn default() -> Self {
        Self {
            fast: Duration::from_secs(DEFAULT_FAST_INTERVAL_SECS),
            slow: Duration::from_secs(DEFAULT_SLOW_INTERVAL_SECS),
        }
    }
}

impl From<&cr_config::MonitorConfig> for PollIntervals {
    fn from(config: &cr_config::MonitorConfig) -> Self {
        Self {
            fast: config.fast_interval(),
            slow: config.slow_interval(),
        }
    }
}
