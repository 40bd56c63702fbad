use cr_core::ports::watcher_control::{WatcherControlError, WatcherControlPort};
use tracing::debug;

use crate::ipc::PlatformCommand;
use crate::runtime::PlatformCommandSender;

/// [`WatcherControlPort`] backed by the in-process command channel of a
/// [`WatcherRuntime`].
///
/// Cheap to clone; every clone talks to the same runtime.
///
/// [`WatcherRuntime`]: crate::runtime::WatcherRuntime
#[derive(Clone)]
pub struct InMemoryWatcherControl {
    cmd_tx: PlatformCommandSender,
}

impl InMemoryWatcherControl {
    pub fn new(cmd_tx: PlatformCommandSender) -> Self {
        Self { cmd_tx }
    }

    /// Ask the runtime loop to exit.
    pub async fn shutdown(&self) -> Result<(), WatcherControlError> {
        self.send(PlatformCommand::Shutdown, |_| WatcherControlError::ChannelClosed)
            .await
    }

    async fn send(
        &self,
        command: PlatformCommand,
        on_error: fn(String) -> WatcherControlError,
    ) -> Result<(), WatcherControlError> {
        debug!(?command, "Sending watcher command");
        self.cmd_tx.send(command).await.map_err(|err| {
            // A send only fails once the receiver is dropped.
            if self.cmd_tx.is_closed() {
                WatcherControlError::ChannelClosed
            } else {
                on_error(err.to_string())
            }
        })
    }
}

#[async_trait::async_trait]
impl WatcherControlPort for InMemoryWatcherControl {
    async fn start_watcher(&self) -> Result<(), WatcherControlError> {
        self.send(
            PlatformCommand::StartClipboardWatcher,
            WatcherControlError::StartFailed,
        )
        .await
    }

    async fn stop_watcher(&self) -> Result<(), WatcherControlError> {
        self.send(
            PlatformCommand::StopClipboardWatcher,
            WatcherControlError::StopFailed,
        )
        .await
    }
}
