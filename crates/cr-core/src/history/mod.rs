mod entry;
mod ring;

pub use entry::{HistoryEntry, Slot};
pub use ring::{HistoryRing, InsertOutcome};
