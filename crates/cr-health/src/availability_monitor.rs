//! Backend availability polling with adaptive cadence.

use crate::poll_schedule::PollSchedule;
use crate::{
    AvailabilityHandle, HealthError, HealthProbe, HealthResult, HttpProbe, MonitorSettings,
    PollIntervals, ServerState,
};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use log::{debug, info};
use tokio::sync::{Notify, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Polls a health endpoint and publishes the resulting `ServerState`.
///
/// Responsibilities:
/// - Probe immediately on start, then on a fast or slow cadence
/// - Publish every probe result to subscribers
/// - Accept manual retries while offline
/// - Cancel the pending timer and any in-flight probe on stop
pub struct AvailabilityMonitor {
    probe: Arc<dyn HealthProbe>,
    intervals: PollIntervals,
    state_tx: watch::Sender<ServerState>,
    state_rx: watch::Receiver<ServerState>,
    probe_gate: Arc<tokio::sync::Mutex<()>>,
    run: Mutex<Option<ActiveRun>>,
    stop_requested: AtomicBool,
}

/// The polling task plus the signals shared with it.
struct ActiveRun {
    task: JoinHandle<()>,
    control: Arc<RunControl>,
}

struct RunControl {
    stopped: AtomicBool,
    retry: Notify,
}

impl AvailabilityMonitor {
    /// Create a monitor around any probe implementation.
    pub fn new(probe: Arc<dyn HealthProbe>, intervals: PollIntervals) -> Self {
        let (state_tx, state_rx) = watch::channel(ServerState::Waking);

        Self {
            probe,
            intervals,
            state_tx,
            state_rx,
            probe_gate: Arc::new(tokio::sync::Mutex::new(())),
            run: Mutex::new(None),
            stop_requested: AtomicBool::new(false),
        }
    }

    /// Create a monitor that probes the configured health URL over HTTP.
    pub fn from_settings(settings: &MonitorSettings) -> HealthResult<Self> {
        let probe = HttpProbe::from_settings(settings)?;
        Ok(Self::new(Arc::new(probe), settings.intervals))
    }

    /// Start polling: probe now, then keep probing until stopped.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&self) -> HealthResult<()> {
        let mut run = self.lock_run();

        if run.as_ref().is_some_and(|active| !active.task.is_finished()) {
            return Err(HealthError::already_running());
        }
        self.stop_requested.store(false, Ordering::SeqCst);

        // A fresh run knows nothing yet
        self.state_tx.send_if_modified(|state| {
            let reset = *state != ServerState::Waking;
            *state = ServerState::Waking;
            reset
        });

        let control = Arc::new(RunControl {
            stopped: AtomicBool::new(false),
            retry: Notify::new(),
        });

        let poller = Poller {
            probe: self.probe.clone(),
            intervals: self.intervals,
            state_tx: self.state_tx.clone(),
            probe_gate: self.probe_gate.clone(),
            control: control.clone(),
        };

        let task = tokio::spawn(poller.run());
        *run = Some(ActiveRun { task, control });

        info!(
            "Availability monitor started (fast={:?}, slow={:?})",
            self.intervals.fast, self.intervals.slow
        );
        Ok(())
    }

    /// Stop polling.
    ///
    /// Cancels the pending timer and any in-flight probe. No state change is
    /// published after this returns, and `probe()` becomes a no-op until the
    /// next `start()`. Safe to call repeatedly.
    pub fn stop(&self) {
        self.stop_requested.store(true, Ordering::SeqCst);

        let Some(active) = self.lock_run().take() else {
            return;
        };

        // Flip under the channel lock so a racing publish cannot land afterwards
        self.state_tx.send_if_modified(|_| {
            active.control.stopped.store(true, Ordering::SeqCst);
            false
        });
        active.task.abort();

        info!("Availability monitor stopped");
    }

    /// Whether the polling task is active.
    pub fn is_running(&self) -> bool {
        self.lock_run()
            .as_ref()
            .is_some_and(|active| !active.task.is_finished())
    }

    /// Run one probe outside the schedule and publish its result.
    ///
    /// Works on a monitor that was never started. After `stop()` it sends
    /// nothing and returns the last published state. Waits for any in-flight
    /// probe to finish first so probes never overlap.
    pub async fn probe(&self) -> ServerState {
        if self.stop_requested.load(Ordering::SeqCst) {
            debug!("Probe skipped: monitor is stopped");
            return self.state();
        }

        let control = self.lock_run().as_ref().map(|active| active.control.clone());

        let _permit = self.probe_gate.lock().await;
        let state = self.probe.probe().await;
        publish(&self.state_tx, control.as_deref(), state);
        state
    }

    /// Ask for an immediate probe.
    ///
    /// Only honored while offline with no probe in flight; returns whether
    /// the request was accepted. The next scheduled probe is re-armed from
    /// the retry's result.
    pub fn retry(&self) -> bool {
        // Results are published under the gate, so the state read here is final
        let Ok(_permit) = self.probe_gate.try_lock() else {
            debug!("Retry ignored: a probe is already in flight");
            return false;
        };

        let state = self.state();
        if !state.allows_manual_retry() {
            debug!("Retry ignored: server is {state}, polling will resolve it");
            return false;
        }

        match self.lock_run().as_ref() {
            Some(active) if !active.task.is_finished() => {
                info!("Manual retry requested");
                active.control.retry.notify_one();
                true
            }
            _ => {
                debug!("Retry ignored: monitor is not running");
                false
            }
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> ServerState {
        *self.state_rx.borrow()
    }

    pub fn is_fully_available(&self) -> bool {
        self.state().is_fully_available()
    }

    /// Subscribe to state recomputations.
    pub fn subscribe(&self) -> watch::Receiver<ServerState> {
        self.state_rx.clone()
    }

    /// Read-only handle for consumers.
    pub fn handle(&self) -> AvailabilityHandle {
        AvailabilityHandle::new(self.state_rx.clone())
    }

    /// Wake the poller as a retry would, skipping the acceptance checks.
    #[cfg(test)]
    pub(crate) fn signal_retry(&self) {
        if let Some(active) = self.lock_run().as_ref() {
            active.control.retry.notify_one();
        }
    }

    fn lock_run(&self) -> MutexGuard<'_, Option<ActiveRun>> {
        self.run.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for AvailabilityMonitor {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Publish unconditionally; duplicates are allowed. Returns false once the
/// run has been stopped.
fn publish(
    state_tx: &watch::Sender<ServerState>,
    control: Option<&RunControl>,
    state: ServerState,
) -> bool {
    let mut previous = None;

    let published = state_tx.send_if_modified(|current| {
        if control.is_some_and(|c| c.stopped.load(Ordering::SeqCst)) {
            return false;
        }
        previous = Some(*current);
        *current = state;
        true
    });

    match previous {
        Some(previous) if previous != state => {
            info!("Server state changed: {previous} -> {state}")
        }
        Some(_) => debug!("Server state unchanged: {state}"),
        None => {}
    }

    published
}

/// State owned by the polling task.
struct Poller {
    probe: Arc<dyn HealthProbe>,
    intervals: PollIntervals,
    state_tx: watch::Sender<ServerState>,
    probe_gate: Arc<tokio::sync::Mutex<()>>,
    control: Arc<RunControl>,
}

impl Poller {
    async fn run(self) {
        let mut schedule = PollSchedule::new(self.intervals);

        loop {
            let decision = {
                let _permit = self.probe_gate.lock().await;
                let result = self.probe.probe().await;

                if !publish(&self.state_tx, Some(&self.control), result) {
                    break;
                }
                schedule.record(result)
            };

            if decision.changed {
                info!(
                    "Polling cadence now {} (every {:?})",
                    decision.cadence, decision.next_delay
                );
            }

            self.wait_for_next(decision.next_delay).await;
        }

        debug!("Polling task exiting (cadence {})", schedule.cadence());
    }

    /// Sleep until the next scheduled probe or an accepted retry.
    ///
    /// A retry signal that arrives once the server has left `offline` is
    /// stale and does not cut the interval short.
    async fn wait_for_next(&self, delay: Duration) {
        let deadline = Instant::now() + delay;

        loop {
            tokio::select! {
                _ = tokio::time::sleep_until(deadline) => return,
                _ = self.control.retry.notified() => {
                    let state = *self.state_tx.borrow();
                    if state.allows_manual_retry() {
                        return;
                    }
                    debug!("Stale retry ignored: server is {state}");
                }
            }
        }
    }
}
