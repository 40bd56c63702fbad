use std::sync::Arc;

use cr_core::{HistoryConfig, HistoryRing, SuppressionLatch};
use tokio::sync::Mutex;

/// Everything the watcher and the user-action paths mutate.
///
/// Ring and latch sit behind one lock so a capture can never interleave with
/// a selection between "arm" and "write".
#[derive(Debug, Default)]
pub struct HistoryState {
    pub ring: HistoryRing,
    pub latch: SuppressionLatch,
}

pub type SharedHistoryState = Arc<Mutex<HistoryState>>;

impl HistoryState {
    pub fn from_config(config: &HistoryConfig) -> Self {
        Self {
            ring: HistoryRing::with_max_entries(config.max_entries()),
            latch: SuppressionLatch::new(config.suppression_ttl()),
        }
    }

    pub fn shared(self) -> SharedHistoryState {
        Arc::new(Mutex::new(self))
    }
}
