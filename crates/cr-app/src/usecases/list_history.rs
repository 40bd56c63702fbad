use cr_core::HistoryEntry;

use crate::state::SharedHistoryState;

/// Ordered copy of the history for rendering. The lock is released before
/// the caller touches the result.
pub struct ListHistory {
    state: SharedHistoryState,
}

impl ListHistory {
    pub fn new(state: SharedHistoryState) -> Self {
        Self { state }
    }

    pub async fn execute(&self) -> Vec<HistoryEntry> {
        self.state.lock().await.ring.view()
    }
}
