use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_FAST_INTERVAL_SECS, DEFAULT_PROBE_TIMEOUT_MS,
    DEFAULT_SLOW_INTERVAL_SECS, MAX_FAST_INTERVAL_SECS, MAX_PROBE_TIMEOUT_MS,
    MAX_SLOW_INTERVAL_SECS, MIN_FAST_INTERVAL_SECS, MIN_PROBE_TIMEOUT_MS,
};

use std::time::Duration;

use serde::Deserialize;

/// Availability monitor timing.
///
/// Probes run every `fast_interval_secs` while the backend may still be
/// starting, and every `slow_interval_secs` once it is confirmed up or down.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// How long a single probe may wait for a response
    pub probe_timeout_ms: u64,
    /// Interval between probes while waking or restarting
    pub fast_interval_secs: u64,
    /// Interval between probes once online or offline
    pub slow_interval_secs: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            probe_timeout_ms: DEFAULT_PROBE_TIMEOUT_MS,
            fast_interval_secs: DEFAULT_FAST_INTERVAL_SECS,
            slow_interval_secs: DEFAULT_SLOW_INTERVAL_SECS,
        }
    }
}

impl MonitorConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.probe_timeout_ms < MIN_PROBE_TIMEOUT_MS
            || self.probe_timeout_ms > MAX_PROBE_TIMEOUT_MS
        {
            return Err(ConfigError::monitor(format!(
                "monitor.probe_timeout_ms must be {}-{}, got {}",
                MIN_PROBE_TIMEOUT_MS, MAX_PROBE_TIMEOUT_MS, self.probe_timeout_ms
            )));
        }

        if self.fast_interval_secs < MIN_FAST_INTERVAL_SECS
            || self.fast_interval_secs > MAX_FAST_INTERVAL_SECS
        {
            return Err(ConfigError::monitor(format!(
                "monitor.fast_interval_secs must be {}-{}, got {}",
                MIN_FAST_INTERVAL_SECS, MAX_FAST_INTERVAL_SECS, self.fast_interval_secs
            )));
        }

        if self.slow_interval_secs < self.fast_interval_secs
            || self.slow_interval_secs > MAX_SLOW_INTERVAL_SECS
        {
            return Err(ConfigError::monitor(format!(
                "monitor.slow_interval_secs must be {}-{} (not below fast_interval_secs), got {}",
                self.fast_interval_secs, MAX_SLOW_INTERVAL_SECS, self.slow_interval_secs
            )));
        }

        Ok(())
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }

    pub fn fast_interval(&self) -> Duration {
        Duration::from_secs(self.fast_interval_secs)
    }

    pub fn slow_interval(&self) -> Duration {
        Duration::from_secs(self.slow_interval_secs)
    }
}
