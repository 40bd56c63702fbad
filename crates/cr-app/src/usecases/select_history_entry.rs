//! Restore a history entry onto the system clipboard.

use std::sync::Arc;

use anyhow::Result;
use cr_core::ports::{ClipboardProviderPort, HistoryObserverPort};
use cr_core::Slot;
use tracing::{debug, info, info_span, Instrument};

use crate::state::SharedHistoryState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Selected { index: usize },
    /// Stale index or unassigned slot; nothing was touched.
    NotFound,
}

/// Use case for a user picking an entry from the history.
///
/// The suppression latch is armed *before* the write so the resulting
/// clipboard change can never be observed ahead of it. If the write fails
/// the latch is disarmed again and the selection is left as it was.
///
/// An index or slot that names no entry is a silent no-op: no write, no
/// latch, no state change.
pub struct SelectHistoryEntry {
    state: SharedHistoryState,
    clipboard: Arc<dyn ClipboardProviderPort>,
    observer: Arc<dyn HistoryObserverPort>,
}

impl SelectHistoryEntry {
    pub fn new(
        state: SharedHistoryState,
        clipboard: Arc<dyn ClipboardProviderPort>,
        observer: Arc<dyn HistoryObserverPort>,
    ) -> Self {
        Self {
            state,
            clipboard,
            observer,
        }
    }

    pub async fn execute(&self, index: usize) -> Result<SelectOutcome> {
        let span = info_span!("usecase.select_history_entry.execute", index);

        async {
            let mut state = self.state.lock().await;

            let Some(value) = state.ring.get(index).map(|e| e.value.clone()) else {
                debug!(len = state.ring.len(), "Selection index out of range, ignoring");
                return Ok(SelectOutcome::NotFound);
            };

            state.latch.arm();
            if let Err(e) = self.clipboard.write_text(&value) {
                state.latch.disarm();
                return Err(e.context("Failed to restore history entry to clipboard"));
            }

            state.ring.mark_selected(index);
            let view = state.ring.view();
            drop(state);

            info!(len = value.len(), "History entry restored to clipboard");
            self.observer.history_changed(&view);
            Ok(SelectOutcome::Selected { index })
        }
        .instrument(span)
        .await
    }

    /// Select whichever entry currently carries `slot`.
    pub async fn execute_slot(&self, slot: Slot) -> Result<SelectOutcome> {
        let position = self.state.lock().await.ring.position_of_slot(slot);

        match position {
            Some(index) => self.execute(index).await,
            None => {
                debug!(%slot, "No history entry carries this slot, ignoring");
                Ok(SelectOutcome::NotFound)
            }
        }
    }
}
