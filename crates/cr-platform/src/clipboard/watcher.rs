//! Clipboard change watcher
//!
//! The clipboard offers no change callback, so the watcher samples the
//! provider's change counter on every tick and diffs it against the last
//! value seen. Only a counter change causes a text read.
//!
//! ```text
//! tick → read_change_count ─(unchanged)→ done
//!                 │
//!             (changed) → remember counter → read_text ─(None)→ done
//!                                                │
//!                                           (Some) → ClipboardTextHandler::deliver
//! ```
//!
//! The counter is remembered before the text is read, so non-text content
//! and failed text reads still consume the change.

use std::sync::Arc;

use cr_core::ports::{ClipboardProviderPort, ClipboardTextHandler};
use cr_core::ChangeBaseline;
use tracing::{debug, trace, warn};

/// What a single [`ChangeWatcher::on_tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Counter equal to the last one seen.
    Unchanged,
    /// Counter moved but the clipboard holds no text.
    ChangedWithoutText,
    /// Counter moved and the text was handed to the handler.
    Delivered,
    /// Reading the clipboard or delivering the text failed.
    Failed,
}

pub struct ChangeWatcher {
    provider: Arc<dyn ClipboardProviderPort>,
    handler: Arc<dyn ClipboardTextHandler>,
    last_change_count: u64,
}

impl ChangeWatcher {
    /// Build a watcher whose starting counter follows `baseline`.
    ///
    /// With [`ChangeBaseline::Current`] the provider is read once here so the
    /// first tick does not fire for content copied before startup. If that
    /// read fails the watcher starts from 0 instead.
    pub fn new(
        provider: Arc<dyn ClipboardProviderPort>,
        handler: Arc<dyn ClipboardTextHandler>,
        baseline: ChangeBaseline,
    ) -> Self {
        let last_change_count = match baseline {
            ChangeBaseline::Current => provider.read_change_count().unwrap_or_else(|e| {
                warn!(error = %e, "Failed to read initial clipboard change count, starting from 0");
                0
            }),
            ChangeBaseline::Unset => 0,
        };

        debug!(last_change_count, ?baseline, "Clipboard watcher initialised");

        Self {
            provider,
            handler,
            last_change_count,
        }
    }

    pub fn last_change_count(&self) -> u64 {
        self.last_change_count
    }

    /// Sample the clipboard once.
    pub async fn on_tick(&mut self) -> TickOutcome {
        let change_count = match self.provider.read_change_count() {
            Ok(count) => count,
            Err(e) => {
                warn!(error = %e, "Failed to read clipboard change count");
                return TickOutcome::Failed;
            }
        };

        if change_count == self.last_change_count {
            trace!(change_count, "Clipboard unchanged");
            return TickOutcome::Unchanged;
        }

        debug!(
            previous = self.last_change_count,
            change_count, "Clipboard change detected"
        );
        self.last_change_count = change_count;

        let text = match self.provider.read_text() {
            Ok(Some(text)) => text,
            Ok(None) => {
                debug!(change_count, "Clipboard content is not text, skipping");
                return TickOutcome::ChangedWithoutText;
            }
            Err(e) => {
                warn!(error = %e, change_count, "Failed to read clipboard text");
                return TickOutcome::Failed;
            }
        };

        match self.handler.deliver(text).await {
            Ok(()) => TickOutcome::Delivered,
            Err(e) => {
                warn!(error = %e, change_count, "Clipboard text handler failed");
                TickOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::InMemoryClipboard;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingHandler {
        delivered: Mutex<Vec<String>>,
    }

    impl RecordingHandler {
        fn delivered(&self) -> Vec<String> {
            self.delivered.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl ClipboardTextHandler for RecordingHandler {
        async fn deliver(&self, text: String) -> anyhow::Result<()> {
            self.delivered.lock().unwrap().push(text);
            Ok(())
        }
    }

    struct FailingProvider;

    impl ClipboardProviderPort for FailingProvider {
        fn read_change_count(&self) -> anyhow::Result<u64> {
            Err(anyhow::anyhow!("clipboard unavailable"))
        }

        fn read_text(&self) -> anyhow::Result<Option<String>> {
            Err(anyhow::anyhow!("clipboard unavailable"))
        }

        fn write_text(&self, _text: &str) -> anyhow::Result<()> {
            Ok(())
        }

        fn clear(&self) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn watcher_for(
        clipboard: &Arc<InMemoryClipboard>,
        baseline: ChangeBaseline,
    ) -> (ChangeWatcher, Arc<RecordingHandler>) {
        let handler = Arc::new(RecordingHandler::default());
        let watcher = ChangeWatcher::new(clipboard.clone(), handler.clone(), baseline);
        (watcher, handler)
    }

    #[tokio::test]
    async fn current_baseline_ignores_preexisting_content() {
        let clipboard = Arc::new(InMemoryClipboard::with_text("before start"));
        let (mut watcher, handler) = watcher_for(&clipboard, ChangeBaseline::Current);

        assert_eq!(watcher.last_change_count(), 1);
        assert_eq!(watcher.on_tick().await, TickOutcome::Unchanged);
        assert!(handler.delivered().is_empty());
    }

    #[tokio::test]
    async fn unset_baseline_captures_preexisting_content() {
        let clipboard = Arc::new(InMemoryClipboard::with_text("before start"));
        let (mut watcher, handler) = watcher_for(&clipboard, ChangeBaseline::Unset);

        assert_eq!(watcher.on_tick().await, TickOutcome::Delivered);
        assert_eq!(handler.delivered(), vec!["before start".to_string()]);
    }

    #[tokio::test]
    async fn repeated_ticks_without_change_deliver_nothing() {
        let clipboard = Arc::new(InMemoryClipboard::new());
        let (mut watcher, handler) = watcher_for(&clipboard, ChangeBaseline::Current);

        for _ in 0..10 {
            assert_eq!(watcher.on_tick().await, TickOutcome::Unchanged);
        }
        assert!(handler.delivered().is_empty());
    }

    #[tokio::test]
    async fn change_is_delivered_once() {
        let clipboard = Arc::new(InMemoryClipboard::new());
        let (mut watcher, handler) = watcher_for(&clipboard, ChangeBaseline::Current);

        clipboard.simulate_copy("a");
        assert_eq!(watcher.on_tick().await, TickOutcome::Delivered);
        assert_eq!(watcher.on_tick().await, TickOutcome::Unchanged);

        assert_eq!(handler.delivered(), vec!["a".to_string()]);
        assert_eq!(watcher.last_change_count(), 1);
    }

    #[tokio::test]
    async fn non_text_change_advances_counter_without_delivery() {
        let clipboard = Arc::new(InMemoryClipboard::new());
        let (mut watcher, handler) = watcher_for(&clipboard, ChangeBaseline::Current);

        clipboard.simulate_non_text_copy();

        assert_eq!(watcher.on_tick().await, TickOutcome::ChangedWithoutText);
        assert_eq!(watcher.last_change_count(), 1);
        assert_eq!(watcher.on_tick().await, TickOutcome::Unchanged);
        assert!(handler.delivered().is_empty());
    }

    #[tokio::test]
    async fn several_copies_between_ticks_deliver_latest_text() {
        let clipboard = Arc::new(InMemoryClipboard::new());
        let (mut watcher, handler) = watcher_for(&clipboard, ChangeBaseline::Current);

        clipboard.simulate_copy("a");
        clipboard.simulate_copy("b");

        assert_eq!(watcher.on_tick().await, TickOutcome::Delivered);
        assert_eq!(handler.delivered(), vec!["b".to_string()]);
    }

    #[tokio::test]
    async fn failing_provider_is_reported_not_fatal() {
        let handler = Arc::new(RecordingHandler::default());
        let mut watcher =
            ChangeWatcher::new(Arc::new(FailingProvider), handler.clone(), ChangeBaseline::Current);

        assert_eq!(watcher.last_change_count(), 0);
        assert_eq!(watcher.on_tick().await, TickOutcome::Failed);
        assert!(handler.delivered().is_empty());
    }
}
