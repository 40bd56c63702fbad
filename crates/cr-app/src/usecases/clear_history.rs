use std::sync::Arc;

use anyhow::Result;
use cr_core::ports::{ClipboardProviderPort, HistoryObserverPort};
use tracing::{info, info_span, warn, Instrument};

use crate::state::SharedHistoryState;

/// Use case for emptying the history.
///
/// With `clear_clipboard` set the system clipboard is cleared too. That
/// change carries no text, so the watcher records nothing for it. Any armed
/// latch is dropped at the same time: a pending write-back and the clear
/// collapse into one observed change, and that change never reaches the
/// latch. If clearing the clipboard fails, the latch is kept.
pub struct ClearHistory {
    state: SharedHistoryState,
    clipboard: Arc<dyn ClipboardProviderPort>,
    observer: Arc<dyn HistoryObserverPort>,
    clear_clipboard: bool,
}

impl ClearHistory {
    pub fn new(
        state: SharedHistoryState,
        clipboard: Arc<dyn ClipboardProviderPort>,
        observer: Arc<dyn HistoryObserverPort>,
        clear_clipboard: bool,
    ) -> Self {
        Self {
            state,
            clipboard,
            observer,
            clear_clipboard,
        }
    }

    pub async fn execute(&self) -> Result<()> {
        let span = info_span!("usecase.clear_history.execute");

        async {
            let mut state = self.state.lock().await;
            let removed = state.ring.len();
            state.ring.clear();

            if self.clear_clipboard {
                match self.clipboard.clear() {
                    Ok(()) => state.latch.disarm(),
                    // The clipboard is untouched, so a pending write-back
                    // still needs its latch.
                    Err(e) => warn!(error = %e, "Failed to clear system clipboard"),
                }
            }
            drop(state);

            info!(removed, "History cleared");
            self.observer.history_changed(&[]);
            Ok(())
        }
        .instrument(span)
        .await
    }
}
