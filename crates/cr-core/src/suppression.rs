//! One-shot latch that hides our own clipboard write-back from the watcher.
//!
//! Writing a history entry back to the clipboard bumps the provider's change
//! counter exactly like a user copy would. The latch is armed right before
//! that write and consumed by the next observed change, which is then
//! dropped instead of re-captured.
//!
//! If the write never registers as a change the latch would stay armed and
//! swallow the next real copy. An optional time-to-live bounds that: a latch
//! older than its TTL reads as not armed.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct SuppressionLatch {
    armed_at: Option<Instant>,
    ttl: Option<Duration>,
}

impl SuppressionLatch {
    /// `ttl = None` keeps the latch armed until consumed.
    pub fn new(ttl: Option<Duration>) -> Self {
        Self {
            armed_at: None,
            ttl,
        }
    }

    pub fn arm(&mut self) {
        self.arm_at(Instant::now());
    }

    pub fn arm_at(&mut self, now: Instant) {
        self.armed_at = Some(now);
    }

    pub fn disarm(&mut self) {
        self.armed_at = None;
    }

    pub fn is_armed(&self) -> bool {
        self.is_armed_at(Instant::now())
    }

    pub fn is_armed_at(&self, now: Instant) -> bool {
        self.armed_at
            .map(|armed_at| !self.expired(armed_at, now))
            .unwrap_or(false)
    }

    /// Clear the latch and report whether it was armed and still live.
    pub fn consume(&mut self) -> bool {
        self.consume_at(Instant::now())
    }

    pub fn consume_at(&mut self, now: Instant) -> bool {
        match self.armed_at.take() {
            Some(armed_at) if !self.expired(armed_at, now) => true,
            Some(_) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Suppression latch expired before a clipboard change was observed");
                false
            }
            None => false,
        }
    }

    fn expired(&self, armed_at: Instant, now: Instant) -> bool {
        match self.ttl {
            Some(ttl) => now.saturating_duration_since(armed_at) > ttl,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_is_consumed_once() {
        let mut latch = SuppressionLatch::new(None);
        latch.arm();

        assert!(latch.consume());
        assert!(!latch.consume());
        assert!(!latch.is_armed());
    }

    #[test]
    fn unarmed_latch_consumes_false() {
        let mut latch = SuppressionLatch::new(Some(Duration::from_secs(1)));
        assert!(!latch.consume());
    }

    #[test]
    fn latch_without_ttl_never_expires() {
        let mut latch = SuppressionLatch::new(None);
        let armed_at = Instant::now();
        latch.arm_at(armed_at);

        let much_later = armed_at + Duration::from_secs(60 * 60 * 24);
        assert!(latch.is_armed_at(much_later));
        assert!(latch.consume_at(much_later));
    }

    #[test]
    fn latch_expires_after_ttl_and_is_cleared() {
        let mut latch = SuppressionLatch::new(Some(Duration::from_millis(500)));
        let armed_at = Instant::now();
        latch.arm_at(armed_at);

        let within = armed_at + Duration::from_millis(500);
        assert!(latch.is_armed_at(within));

        let after = armed_at + Duration::from_millis(501);
        assert!(!latch.is_armed_at(after));
        assert!(!latch.consume_at(after));
        assert!(!latch.is_armed_at(within), "expired latch is cleared");
    }

    #[test]
    fn disarm_clears_latch() {
        let mut latch = SuppressionLatch::new(None);
        latch.arm();
        latch.disarm();
        assert!(!latch.consume());
    }

    #[test]
    fn rearming_refreshes_deadline() {
        let mut latch = SuppressionLatch::new(Some(Duration::from_millis(100)));
        let start = Instant::now();
        latch.arm_at(start);
        latch.arm_at(start + Duration::from_millis(80));

        assert!(latch.consume_at(start + Duration::from_millis(150)));
    }
}
