use std::collections::VecDeque;

use super::entry::{HistoryEntry, Slot};

/// Result of [`HistoryRing::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new head entry was created. `evicted` counts tail entries dropped to
    /// stay within capacity.
    Inserted { evicted: usize },
    /// The value matched the current head; only the selection changed.
    Deduplicated,
}

impl InsertOutcome {
    pub fn is_inserted(&self) -> bool {
        matches!(self, InsertOutcome::Inserted { .. })
    }
}

/// Most-recent-first clipboard history.
///
/// Owns the insertion, de-duplication, slot and selection rules:
///
/// - inserting the current head's value again only re-selects the head;
/// - every other insertion prepends a selected head and shifts numbered
///   slots down by one, so slot `1` always names the second-most-recent
///   entry;
/// - at most one entry is selected at any time;
/// - with a capacity set, the oldest entries are evicted from the tail.
#[derive(Debug, Clone, Default)]
pub struct HistoryRing {
    entries: VecDeque<HistoryEntry>,
    max_entries: Option<usize>,
}

impl HistoryRing {
    /// Unbounded ring.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ring holding at most `max_entries` entries. `None` or `Some(0)` means
    /// unbounded.
    pub fn with_max_entries(max_entries: Option<usize>) -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries: max_entries.filter(|&n| n > 0),
        }
    }

    pub fn max_entries(&self) -> Option<usize> {
        self.max_entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn head(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.entries.iter().position(|e| e.selected)
    }

    /// Position of the entry currently carrying `slot`.
    pub fn position_of_slot(&self, slot: Slot) -> Option<usize> {
        self.entries.iter().position(|e| e.slot == Some(slot))
    }

    /// Record a newly copied value.
    pub fn insert(&mut self, value: impl Into<String>) -> InsertOutcome {
        let value = value.into();

        if let Some(head) = self.entries.front() {
            if head.value == value {
                self.select_only(0);
                return InsertOutcome::Deduplicated;
            }
        }

        self.deselect_all();
        self.entries.push_front(HistoryEntry::new_head(value));

        // Positions past MAX + 1 never carried a slot, so only the shifted
        // window needs renumbering.
        let window = usize::from(Slot::MAX) + 2;
        for (position, entry) in self.entries.iter_mut().enumerate().take(window) {
            entry.slot = Slot::for_position(position);
        }

        let evicted = self.evict_overflow();
        InsertOutcome::Inserted { evicted }
    }

    /// Mark the entry at `index` as the only selected one.
    ///
    /// Returns `None` without touching any state when `index` is out of range.
    pub fn mark_selected(&mut self, index: usize) -> Option<&HistoryEntry> {
        if index >= self.entries.len() {
            return None;
        }
        self.select_only(index);
        self.entries.get(index)
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Ordered snapshot for rendering.
    pub fn view(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }

    fn deselect_all(&mut self) {
        for entry in self.entries.iter_mut() {
            entry.selected = false;
        }
    }

    fn select_only(&mut self, index: usize) {
        for (position, entry) in self.entries.iter_mut().enumerate() {
            entry.selected = position == index;
        }
    }

    fn evict_overflow(&mut self) -> usize {
        let Some(max) = self.max_entries else {
            return 0;
        };

        let mut evicted = 0;
        while self.entries.len() > max {
            self.entries.pop_back();
            evicted += 1;
        }

        #[cfg(feature = "tracing")]
        if evicted > 0 {
            tracing::debug!(evicted, max_entries = max, "Evicted oldest history entries");
        }

        evicted
    }
}
