mod server_state;

use crate::{HealthProbe, ServerState, classify_within};

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

pub(crate) const PROBE_TIMEOUT: Duration = Duration::from_secs(8);

/// How the simulated backend answers one probe.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Reply {
    /// Answer with `status` after `after`
    Status { after: Duration, status: u16 },
    /// Fail immediately at the transport level
    Refused,
    /// Never answer
    Hang,
}

impl Reply {
    pub(crate) fn ok() -> Self {
        Reply::Status {
            after: Duration::ZERO,
            status: 200,
        }
    }

    pub(crate) fn status_after(status: u16, after: Duration) -> Self {
        Reply::Status { after, status }
    }
}

/// Probe double driven by a script of replies under paused tokio time.
///
/// Runs the same timeout classification as the HTTP probe. Once the script
/// is exhausted every probe gets a 200.
pub(crate) struct ScriptedProbe {
    replies: Mutex<VecDeque<Reply>>,
    timeout: Duration,
    calls: AtomicUsize,
    abandoned: Arc<AtomicUsize>,
}

impl ScriptedProbe {
    pub(crate) fn new(replies: impl IntoIterator<Item = Reply>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().collect()),
            timeout: PROBE_TIMEOUT,
            calls: AtomicUsize::new(0),
            abandoned: Arc::new(AtomicUsize::new(0)),
        })
    }

    /// Number of probes started.
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of requests dropped before they completed.
    pub(crate) fn abandoned(&self) -> usize {
        self.abandoned.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HealthProbe for ScriptedProbe {
    async fn probe(&self) -> ServerState {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(Reply::ok);

        let mut pending = AbandonGuard {
            counter: self.abandoned.clone(),
            armed: true,
        };

        let request = async move {
            let outcome = match reply {
                Reply::Status { after, status } => {
                    tokio::time::sleep(after).await;
                    Ok(status)
                }
                Reply::Refused => Err("connection refused"),
                Reply::Hang => std::future::pending().await,
            };
            pending.armed = false;
            outcome
        };

        classify_within(self.timeout, request).await
    }
}

/// Counts a request as abandoned if it is dropped while still armed.
struct AbandonGuard {
    counter: Arc<AtomicUsize>,
    armed: bool,
}

impl Drop for AbandonGuard {
    fn drop(&mut self) {
        if self.armed {
            self.counter.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Assert `actual` is `expected` within timer-wheel rounding.
#[track_caller]
pub(crate) fn assert_near(actual: Duration, expected: Duration) {
    let tolerance = Duration::from_millis(5);
    assert!(
        actual >= expected && actual <= expected + tolerance,
        "expected ~{expected:?}, got {actual:?}"
    );
}
