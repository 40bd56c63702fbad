use crate::history::HistoryEntry;

/// Presentation-side consumer of history changes.
///
/// Called after every insert, de-duplication, selection and clear with the
/// full ordered view. Implementations render; they hold no history state.
pub trait HistoryObserverPort: Send + Sync {
    fn history_changed(&self, view: &[HistoryEntry]);
}
