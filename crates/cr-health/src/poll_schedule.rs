use crate::{Cadence, PollIntervals, ServerState};

use std::time::Duration;

/// Outcome of feeding one probe result into the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ScheduleDecision {
    pub cadence: Cadence,
    /// The timer must be re-armed at the new interval
    pub changed: bool,
    /// Delay until the next probe, measured from the probe that just completed
    pub next_delay: Duration,
}

/// Cadence state machine for one monitor run. Starts fast.
#[derive(Debug, Clone)]
pub(crate) struct PollSchedule {
    cadence: Cadence,
    intervals: PollIntervals,
}

impl PollSchedule {
    pub fn new(intervals: PollIntervals) -> Self {
        Self {
            cadence: Cadence::Fast,
            intervals,
        }
    }

    pub fn cadence(&self) -> Cadence {
        self.cadence
    }

    pub fn record(&mut self, result: ServerState) -> ScheduleDecision {
        let next = self.cadence.next(result);
        let changed = next != self.cadence;
        self.cadence = next;

        ScheduleDecision {
            cadence: next,
            changed,
            next_delay: next.interval(&self.intervals),
        }
    }
}
