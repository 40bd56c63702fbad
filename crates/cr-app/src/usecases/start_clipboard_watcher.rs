//! Use case for starting the clipboard watcher

use std::sync::Arc;

use cr_core::ports::{WatcherControlError, WatcherControlPort};
use tracing::{info, info_span, Instrument};

#[derive(Debug, thiserror::Error)]
pub enum StartClipboardWatcherError {
    #[error("Failed to start clipboard watcher: {0}")]
    StartFailed(#[from] WatcherControlError),
}

/// Asks the watcher runtime to begin polling. Starting a running watcher is
/// a no-op on the runtime side.
pub struct StartClipboardWatcher {
    watcher_control: Arc<dyn WatcherControlPort>,
}

impl StartClipboardWatcher {
    pub fn new(watcher_control: Arc<dyn WatcherControlPort>) -> Self {
        Self { watcher_control }
    }

    pub async fn execute(&self) -> Result<(), StartClipboardWatcherError> {
        let span = info_span!("usecase.start_clipboard_watcher.execute");

        async {
            info!("Requesting clipboard watcher to start");
            self.watcher_control.start_watcher().await?;
            Ok(())
        }
        .instrument(span)
        .await
    }
}
