//! Record text the watcher found on the clipboard.

use std::sync::Arc;

use anyhow::Result;
use cr_core::ports::{ClipboardTextHandler, HistoryObserverPort};
use cr_core::InsertOutcome;
use tracing::{debug, info_span, Instrument};

use crate::state::SharedHistoryState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// The change was our own write-back; the latch swallowed it.
    Suppressed,
    /// Empty text is never recorded.
    Empty,
    /// The ring accepted the text.
    Recorded(InsertOutcome),
}

/// Use case behind the watcher's `deliver` step.
///
/// 1. An armed suppression latch is consumed and the text dropped.
/// 2. Empty text is dropped.
/// 3. Anything else goes into the ring and the observer re-renders.
pub struct CaptureClipboardText {
    state: SharedHistoryState,
    observer: Arc<dyn HistoryObserverPort>,
}

impl CaptureClipboardText {
    pub fn new(state: SharedHistoryState, observer: Arc<dyn HistoryObserverPort>) -> Self {
        Self { state, observer }
    }

    pub async fn execute(&self, text: String) -> CaptureOutcome {
        let span = info_span!("usecase.capture_clipboard_text.execute", len = text.len());

        async {
            let mut state = self.state.lock().await;

            if state.latch.consume() {
                debug!("Dropping clipboard change caused by our own write-back");
                return CaptureOutcome::Suppressed;
            }

            if text.is_empty() {
                debug!("Ignoring empty clipboard text");
                return CaptureOutcome::Empty;
            }

            let outcome = state.ring.insert(text);
            let view = state.ring.view();
            drop(state);

            debug!(?outcome, entries = view.len(), "Clipboard text recorded");
            self.observer.history_changed(&view);
            CaptureOutcome::Recorded(outcome)
        }
        .instrument(span)
        .await
    }
}

#[async_trait::async_trait]
impl ClipboardTextHandler for CaptureClipboardText {
    async fn deliver(&self, text: String) -> Result<()> {
        self.execute(text).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::HistoryState;
    use crate::usecases::test_support::RecordingObserver;
    use cr_core::{HistoryConfig, Slot};

    fn setup() -> (CaptureClipboardText, SharedHistoryState, Arc<RecordingObserver>) {
        let state = HistoryState::default().shared();
        let observer = Arc::new(RecordingObserver::default());
        let use_case = CaptureClipboardText::new(state.clone(), observer.clone());
        (use_case, state, observer)
    }

    #[tokio::test]
    async fn test_text_is_recorded_and_rendered() {
        let (use_case, state, observer) = setup();

        let outcome = use_case.execute("a".to_string()).await;

        assert_eq!(
            outcome,
            CaptureOutcome::Recorded(InsertOutcome::Inserted { evicted: 0 })
        );
        assert_eq!(state.lock().await.ring.len(), 1);
        assert_eq!(observer.render_count(), 1);
        assert_eq!(observer.last_view().unwrap()[0].value, "a");
    }

    #[tokio::test]
    async fn test_duplicate_is_rendered_without_new_entry() {
        let (use_case, state, observer) = setup();

        use_case.execute("a".to_string()).await;
        let outcome = use_case.execute("a".to_string()).await;

        assert_eq!(outcome, CaptureOutcome::Recorded(InsertOutcome::Deduplicated));
        assert_eq!(state.lock().await.ring.len(), 1);
        assert_eq!(observer.render_count(), 2);
    }

    #[tokio::test]
    async fn test_empty_text_is_ignored() {
        let (use_case, state, observer) = setup();

        let outcome = use_case.execute(String::new()).await;

        assert_eq!(outcome, CaptureOutcome::Empty);
        assert!(state.lock().await.ring.is_empty());
        assert_eq!(observer.render_count(), 0);
    }

    #[tokio::test]
    async fn test_armed_latch_drops_one_change() {
        let (use_case, state, observer) = setup();
        state.lock().await.latch.arm();

        assert_eq!(
            use_case.execute("echo".to_string()).await,
            CaptureOutcome::Suppressed
        );
        assert!(!state.lock().await.latch.is_armed());
        assert!(state.lock().await.ring.is_empty());
        assert_eq!(observer.render_count(), 0);

        assert!(matches!(
            use_case.execute("real copy".to_string()).await,
            CaptureOutcome::Recorded(_)
        ));
    }

    #[tokio::test]
    async fn test_armed_latch_is_consumed_even_by_empty_text() {
        let (use_case, state, _observer) = setup();
        state.lock().await.latch.arm();

        assert_eq!(use_case.execute(String::new()).await, CaptureOutcome::Suppressed);
        assert!(!state.lock().await.latch.is_armed());
    }

    #[tokio::test]
    async fn test_capacity_from_config_is_applied() {
        let config = HistoryConfig {
            max_entries: 2,
            ..HistoryConfig::default()
        };
        let state = HistoryState::from_config(&config).shared();
        let use_case = CaptureClipboardText::new(state.clone(), Arc::new(RecordingObserver::default()));

        for text in ["a", "b", "c"] {
            use_case.execute(text.to_string()).await;
        }

        let state = state.lock().await;
        let values: Vec<_> = state.ring.iter().map(|e| e.value.as_str()).collect();
        assert_eq!(values, vec!["c", "b"]);
        assert_eq!(state.ring.get(1).unwrap().slot, Slot::new(1));
    }

    #[tokio::test]
    async fn test_deliver_never_fails() {
        let (use_case, _state, _observer) = setup();
        assert!(use_case.deliver("x".to_string()).await.is_ok());
    }
}
