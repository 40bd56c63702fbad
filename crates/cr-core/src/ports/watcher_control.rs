//! Lifecycle control of the polling timer that feeds the change watcher.

use async_trait::async_trait;

/// Start and stop clipboard polling.
///
/// Both requests are idempotent: starting a running watcher or stopping an
/// idle one changes nothing. Returning `Ok` means the request was handed to
/// the timer host, not that a tick has happened.
#[async_trait]
pub trait WatcherControlPort: Send + Sync {
    async fn start_watcher(&self) -> Result<(), WatcherControlError>;

    async fn stop_watcher(&self) -> Result<(), WatcherControlError>;
}

#[derive(Debug, thiserror::Error)]
pub enum WatcherControlError {
    #[error("Clipboard watcher did not accept start request: {0}")]
    StartFailed(String),

    #[error("Clipboard watcher did not accept stop request: {0}")]
    StopFailed(String),

    /// The timer host is gone; no later request can succeed.
    #[error("Clipboard watcher runtime is no longer running")]
    ChannelClosed,
}
