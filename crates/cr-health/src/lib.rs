//! cr-health
//!
//! Availability monitoring for the clinical records backend. An
//! [`AvailabilityMonitor`] probes `GET {base_url}/health`, classifies each
//! outcome into a [`ServerState`], and publishes it to subscribers:
//!
//! | Probe outcome                  | State        |
//! |--------------------------------|--------------|
//! | 2xx within the timeout         | `online`     |
//! | 5xx within the timeout         | `restarting` |
//! | no response before the timeout | `waking`     |
//! | transport error, other status  | `offline`    |
//!
//! Probing is fast (5s) while the backend may still be starting and slows to
//! 15s once it is confirmed online or offline.

mod availability_handle;
mod availability_monitor;
mod cadence;
mod error;
mod http_probe;
mod monitor_settings;
mod poll_schedule;
mod probe;
mod server_state;

#[cfg(test)]
mod tests;

pub use availability_handle::AvailabilityHandle;
pub use availability_monitor::AvailabilityMonitor;
pub use cadence::{Cadence, PollIntervals};
pub use error::{HealthError, Result as HealthResult};
pub use http_probe::HttpProbe;
pub use monitor_settings::MonitorSettings;
pub use probe::{HealthProbe, classify_within};
pub use server_state::ServerState;
