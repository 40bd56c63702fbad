use std::sync::Mutex;

use cr_core::ports::HistoryObserverPort;
use cr_core::HistoryEntry;

/// Observer that keeps every view it was handed.
#[derive(Default)]
pub struct RecordingObserver {
    views: Mutex<Vec<Vec<HistoryEntry>>>,
}

impl RecordingObserver {
    pub fn render_count(&self) -> usize {
        self.views.lock().unwrap().len()
    }

    pub fn last_view(&self) -> Option<Vec<HistoryEntry>> {
        self.views.lock().unwrap().last().cloned()
    }
}

impl HistoryObserverPort for RecordingObserver {
    fn history_changed(&self, view: &[HistoryEntry]) {
        self.views.lock().unwrap().push(view.to_vec());
    }
}
