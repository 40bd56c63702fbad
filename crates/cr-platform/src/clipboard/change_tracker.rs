//! Change counter for [`SystemClipboard`](super::SystemClipboard).
//!
//! Prefers the OS counter. Without one, the counter is synthesized: each
//! observation fingerprints the current text (xxHash64) and bumps when the
//! fingerprint moved. Writes and clears made through the adapter always bump.
//!
//! The synthesized counter cannot see a copy of the exact text already on
//! the clipboard. Re-copying the current value therefore adds no history
//! entry on platforms without a native counter.

use std::hash::Hasher;

use anyhow::Result;
use twox_hash::XxHash64;

use super::native::NativeChangeCount;

pub(crate) struct ChangeTracker {
    native: Option<NativeChangeCount>,
    change_count: u64,
    fingerprint: Option<u64>,
}

impl ChangeTracker {
    pub(crate) fn new(native: Option<NativeChangeCount>) -> Self {
        Self {
            native,
            change_count: 0,
            fingerprint: None,
        }
    }

    /// Current counter. `read_text` is only called when no native counter
    /// answers.
    pub(crate) fn observe(
        &mut self,
        read_text: impl FnOnce() -> Result<Option<String>>,
    ) -> Result<u64> {
        if let Some(count) = self.native.and_then(|read| read()) {
            return Ok(count);
        }

        let observed = read_text()?.as_deref().map(fingerprint);
        if observed != self.fingerprint {
            self.bump(observed);
        }
        Ok(self.change_count)
    }

    /// Record a write (`Some(text)`) or clear (`None`) made by us.
    pub(crate) fn record_own_change(&mut self, text: Option<&str>) {
        self.bump(text.map(fingerprint));
    }

    fn bump(&mut self, fingerprint: Option<u64>) {
        self.fingerprint = fingerprint;
        self.change_count = self.change_count.wrapping_add(1);
    }
}

fn fingerprint(text: &str) -> u64 {
    let mut hasher = XxHash64::with_seed(0);
    hasher.write(text.as_bytes());
    hasher.finish()
}
