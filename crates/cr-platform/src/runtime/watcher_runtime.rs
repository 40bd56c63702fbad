//! Watcher runtime
//!
//! Owns the [`ChangeWatcher`] and drives it from a fixed-period timer on a
//! single task, so ticks never overlap. Lifecycle commands arrive over the
//! platform command channel:
//!
//! - `StartClipboardWatcher` arms the timer; the first tick fires one period
//!   later.
//! - `StopClipboardWatcher` disarms it.
//! - `Shutdown` (or every sender dropped) ends the loop.
//!
//! Start and stop are idempotent. A tick that falls behind is skipped rather
//! than replayed in a burst.

use std::time::Duration;

use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

use super::event_bus::PlatformCommandReceiver;
use crate::clipboard::ChangeWatcher;
use crate::ipc::PlatformCommand;

pub struct WatcherRuntime {
    watcher: ChangeWatcher,
    command_rx: PlatformCommandReceiver,
    poll_interval: Duration,
    running: bool,
    shutting_down: bool,
}

impl WatcherRuntime {
    pub fn new(
        watcher: ChangeWatcher,
        command_rx: PlatformCommandReceiver,
        poll_interval: Duration,
    ) -> Self {
        Self {
            watcher,
            command_rx,
            poll_interval,
            running: false,
            shutting_down: false,
        }
    }

    pub async fn run(mut self) {
        let mut ticker = interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(
            poll_interval_ms = self.poll_interval.as_millis() as u64,
            "Watcher runtime started"
        );

        while !self.shutting_down {
            tokio::select! {
                _ = ticker.tick(), if self.running => {
                    let outcome = self.watcher.on_tick().await;
                    debug!(?outcome, "Clipboard tick");
                }
                cmd = self.command_rx.recv() => match cmd {
                    Some(cmd) => {
                        if self.handle_command(cmd) {
                            ticker.reset();
                        }
                    }
                    None => {
                        info!("Command channel closed, leaving watcher runtime");
                        break;
                    }
                }
            }
        }

        info!("Watcher runtime stopped");
    }

    /// Returns `true` when the timer was just armed.
    fn handle_command(&mut self, command: PlatformCommand) -> bool {
        match command {
            PlatformCommand::StartClipboardWatcher => {
                if self.running {
                    debug!("Clipboard watcher already running, skipping start");
                    return false;
                }
                self.running = true;
                info!("Clipboard watcher started");
                true
            }
            PlatformCommand::StopClipboardWatcher => {
                if self.running {
                    self.running = false;
                    info!("Clipboard watcher stopped");
                } else {
                    debug!("Clipboard watcher already stopped");
                }
                false
            }
            PlatformCommand::Shutdown => {
                self.running = false;
                self.shutting_down = true;
                info!("Watcher runtime shutting down");
                false
            }
        }
    }
}
