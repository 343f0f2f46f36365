use crate::ServerState;

use tokio::sync::watch;

/// Read-only view of a monitor's published state.
///
/// Cheap to clone; hand one to every consumer that gates on availability.
#[derive(Debug, Clone)]
pub struct AvailabilityHandle {
    state_rx: watch::Receiver<ServerState>,
}

impl AvailabilityHandle {
    pub(crate) fn new(state_rx: watch::Receiver<ServerState>) -> Self {
        Self { state_rx }
    }

    /// Current state snapshot.
    pub fn state(&self) -> ServerState {
        *self.state_rx.borrow()
    }

    /// Current state, marked as seen so `changed()` waits for the next one.
    pub fn current(&mut self) -> ServerState {
        *self.state_rx.borrow_and_update()
    }

    pub fn is_fully_available(&self) -> bool {
        self.state().is_fully_available()
    }

    /// Record creation is hidden unless the backend is fully available.
    pub fn can_create_records(&self) -> bool {
        self.is_fully_available()
    }

    /// Wait for the next state recomputation.
    ///
    /// Fires on every probe result, including repeats of the same state.
    /// Returns `None` once the monitor has been dropped.
    pub async fn changed(&mut self) -> Option<ServerState> {
        self.state_rx.changed().await.ok()?;
        Some(*self.state_rx.borrow_and_update())
    }
}
