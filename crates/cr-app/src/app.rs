//! Wiring of the history state, ports and use cases.

use std::sync::Arc;

use cr_core::ports::{
    ClipboardProviderPort, ClipboardTextHandler, HistoryObserverPort, WatcherControlPort,
};
use cr_core::HistoryConfig;

use crate::state::{HistoryState, SharedHistoryState};
use crate::usecases::{
    CaptureClipboardText, ClearHistory, ListHistory, SelectHistoryEntry, StartClipboardWatcher,
    StopClipboardWatcher,
};

/// One explicitly constructed application instance.
///
/// Holds the single shared [`HistoryState`] and the port handles, and hands
/// out use cases bound to them. The watcher gets its `deliver` handler from
/// [`ClipRingApp::capture_handler`]; the presentation layer uses the rest.
pub struct ClipRingApp {
    state: SharedHistoryState,
    clipboard: Arc<dyn ClipboardProviderPort>,
    observer: Arc<dyn HistoryObserverPort>,
    watcher_control: Arc<dyn WatcherControlPort>,
    clear_clipboard_on_clear: bool,
}

impl ClipRingApp {
    pub fn new(
        config: &HistoryConfig,
        clipboard: Arc<dyn ClipboardProviderPort>,
        observer: Arc<dyn HistoryObserverPort>,
        watcher_control: Arc<dyn WatcherControlPort>,
    ) -> Self {
        Self {
            state: HistoryState::from_config(config).shared(),
            clipboard,
            observer,
            watcher_control,
            clear_clipboard_on_clear: config.clear_clipboard_on_clear,
        }
    }

    pub fn state(&self) -> SharedHistoryState {
        self.state.clone()
    }

    pub fn capture_handler(&self) -> Arc<dyn ClipboardTextHandler> {
        Arc::new(self.capture_clipboard_text())
    }

    pub fn capture_clipboard_text(&self) -> CaptureClipboardText {
        CaptureClipboardText::new(self.state.clone(), self.observer.clone())
    }

    pub fn select_history_entry(&self) -> SelectHistoryEntry {
        SelectHistoryEntry::new(
            self.state.clone(),
            self.clipboard.clone(),
            self.observer.clone(),
        )
    }

    pub fn clear_history(&self) -> ClearHistory {
        ClearHistory::new(
            self.state.clone(),
            self.clipboard.clone(),
            self.observer.clone(),
            self.clear_clipboard_on_clear,
        )
    }

    pub fn list_history(&self) -> ListHistory {
        ListHistory::new(self.state.clone())
    }

    pub fn start_clipboard_watcher(&self) -> StartClipboardWatcher {
        StartClipboardWatcher::new(self.watcher_control.clone())
    }

    pub fn stop_clipboard_watcher(&self) -> StopClipboardWatcher {
        StopClipboardWatcher::new(self.watcher_control.clone())
    }
}
