use std::sync::Arc;

use cr_core::ports::{WatcherControlError, WatcherControlPort};
use tracing::{info, info_span, Instrument};

#[derive(Debug, thiserror::Error)]
pub enum StopClipboardWatcherError {
    #[error("Failed to stop clipboard watcher: {0}")]
    StopFailed(#[from] WatcherControlError),
}

/// Asks the watcher runtime to stop polling.
pub struct StopClipboardWatcher {
    watcher_control: Arc<dyn WatcherControlPort>,
}

impl StopClipboardWatcher {
    pub fn new(watcher_control: Arc<dyn WatcherControlPort>) -> Self {
        Self { watcher_control }
    }

    pub async fn execute(&self) -> Result<(), StopClipboardWatcherError> {
        async {
            info!("Requesting clipboard watcher to stop");
            self.watcher_control.stop_watcher().await?;
            Ok(())
        }
        .instrument(info_span!("usecase.stop_clipboard_watcher.execute"))
        .await
    }
}
