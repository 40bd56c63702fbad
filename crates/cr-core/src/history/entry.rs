use std::fmt;

use serde::{Deserialize, Serialize};

/// Fast-access shortcut digit carried by a history entry.
///
/// Slots are positional: ring position `n` (for `1 <= n <= 9`) carries slot
/// `n`. The head (position 0) and everything from position 10 on carry none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Slot(u8);

impl Slot {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 9;

    /// Build a slot from a digit in `1..=9`.
    pub fn new(digit: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&digit).then_some(Self(digit))
    }

    /// Slot for a ring position, if that position carries one.
    pub fn for_position(position: usize) -> Option<Self> {
        u8::try_from(position).ok().and_then(Self::new)
    }

    /// Parse a single shortcut character such as `'3'`.
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .and_then(Self::new)
    }

    pub fn digit(self) -> u8 {
        self.0
    }

    /// Ring position this slot names.
    pub fn position(self) -> usize {
        usize::from(self.0)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Slot {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Slot::new(value).ok_or_else(|| format!("slot must be within 1..=9, got {value}"))
    }
}

impl From<Slot> for u8 {
    fn from(slot: Slot) -> Self {
        slot.0
    }
}

/// One captured clipboard value.
///
/// `value` is stored exactly as copied; trimming and truncation for display
/// belong to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub value: String,
    pub slot: Option<Slot>,
    pub selected: bool,
}

impl HistoryEntry {
    pub(crate) fn new_head(value: String) -> Self {
        Self {
            value,
            slot: None,
            selected: true,
        }
    }
}
