use crate::PollIntervals;

use std::time::Duration;

use cr_config::DEFAULT_PROBE_TIMEOUT_MS;

/// Everything the monitor needs to run, resolved from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorSettings {
    pub health_url: String,
    pub probe_timeout: Duration,
    pub intervals: PollIntervals,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self::from(&cr_config::Config::default())
    }
}

impl From<&cr_config::Config> for MonitorSettings {
    fn from(config: &cr_config::Config) -> Self {
        Self {
            health_url: config.api.health_url(),
            probe_timeout: config.monitor.probe_timeout(),
            intervals: PollIntervals::from(&config.monitor),
        }
    }
}

impl MonitorSettings {
    /// Settings for a health URL with the stock timeout and cadence.
    pub fn for_url(health_url: impl Into<String>) -> Self {
        Self {
            health_url: health_url.into(),
            probe_timeout: Duration::from_millis(DEFAULT_PROBE_TIMEOUT_MS),
            intervals: PollIntervals::default(),
        }
    }

    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    pub fn with_intervals(mut self, intervals: PollIntervals) -> Self {
        self.intervals = intervals;
        self
    }
}
