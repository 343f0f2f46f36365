use cr_health::ServerState;

use std::time::{Duration, Instant};

use serde::Serialize;

/// How long `waking` lasts before the still-starting hint appears.
pub const STILL_STARTING_AFTER: Duration = Duration::from_secs(30);

pub const RETRY_ACTION: &str = "Retry connection";

/// Short label for the status indicator.
pub fn indicator_label(state: ServerState) -> &'static str {
    if state.is_fully_available() {
        "Registry Online"
    } else {
        "Registry Offline"
    }
}

/// The explanation shown while the backend is not fully available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusNotice {
    pub heading: &'static str,
    pub body: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<&'static str>,
}

impl StatusNotice {
    /// Notice for `state`, or `None` when online.
    ///
    /// `waking_for` is how long the backend has been continuously `waking`.
    pub fn for_state(state: ServerState, waking_for: Duration) -> Option<Self> {
        match state {
            ServerState::Online => None,
            ServerState::Waking => Some(Self {
                heading: "Waking the server",
                body: vec![
                    "The server went to sleep due to inactivity.",
                    "Re-establishing connection, this may take up to 60 seconds...",
                ],
                hint: (waking_for >= STILL_STARTING_AFTER).then_some(
                    "Still starting. A cold start can take a moment on the first request.",
                ),
                action: None,
            }),
            ServerState::Restarting => Some(Self {
                heading: "Server is restarting",
                body: vec![
                    "The server is being redeployed or restarted. This usually resolves in under a minute.",
                    "Please wait, the status will refresh automatically.",
                ],
                hint: None,
                action: None,
            }),
            ServerState::Offline => Some(Self {
                heading: "Could not reach the server",
                body: vec![
                    "Network error: the backend is unreachable. Check your connection or try again.",
                ],
                hint: None,
                action: Some(RETRY_ACTION),
            }),
        }
    }
}

/// Tracks how long the backend has been continuously `waking`.
#[derive(Debug, Default)]
pub struct WakingTimer {
    since: Option<Instant>,
}

impl WakingTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a state observed at `now` and return the time spent waking.
    pub fn observe(&mut self, state: ServerState, now: Instant) -> Duration {
        if state != ServerState::Waking {
            self.since = None;
            return Duration::ZERO;
        }

        let since = *self.since.get_or_insert(now);
        now.saturating_duration_since(since)
    }
}
