use crate::ServerState;

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;

/// A single health check against the records backend.
///
/// Implementations never fail: every outcome, including transport errors and
/// timeouts, is classified into a `ServerState`.
#[async_trait]
pub trait HealthProbe: Send + Sync {
    async fn probe(&self) -> ServerState;
}

/// Classify a request that yields an HTTP status code, bounded by `timeout`.
///
/// If the timeout elapses first the request future is dropped, which aborts
/// the underlying connection attempt, and the result is `Waking`. When the
/// request wins, the timer is dropped with it.
pub async fn classify_within<F, E>(timeout: Duration, request: F) -> ServerState
where
    F: Future<Output = Result<u16, E>>,
    E: Display,
{
    match tokio::time::timeout(timeout, request).await {
        Ok(Ok(status)) => {
            let state = ServerState::from_status(status);
            debug!("Health probe returned HTTP {status} ({state})");
            state
        }
        Ok(Err(e)) => {
            debug!("Health probe failed: {e}");
            ServerState::Offline
        }
        Err(_elapsed) => {
            debug!("Health probe timed out after {timeout:?}");
            ServerState::Waking
        }
    }
}
