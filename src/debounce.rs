//! Time-threshold debouncing for button inputs
//!
//! Mechanical buttons bounce, producing a burst of edges per press. A
//! [`Debouncer`] accepts an event only if at least `threshold_ms` has passed
//! since the last event it accepted. Timestamps come from the caller (a
//! monotonic millisecond tick), so the same logic serves an interrupt
//! handler, a polling loop or a test.
//!
//! ## Example
//!
//! ```
//! use ssd1306_text::Debouncer;
//!
//! let mut button = Debouncer::new(200);
//! assert!(button.accept(1_000));
//! assert!(!button.accept(1_050)); // bounce
//! assert!(button.accept(1_200));
//! ```

/// Threshold used for push buttons unless configured otherwise
pub const DEFAULT_THRESHOLD_MS: u32 = 200;

/// Accepts events spaced at least a threshold apart
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debouncer {
    threshold_ms: u32,
    last_accepted: Option<u32>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD_MS)
    }
}

impl Debouncer {
    /// Create a debouncer with the given threshold
    pub const fn new(threshold_ms: u32) -> Self {
        Self {
            threshold_ms,
            last_accepted: None,
        }
    }

    /// Threshold in milliseconds
    pub const fn threshold_ms(&self) -> u32 {
        self.threshold_ms
    }

    /// Decide whether an event at `now_ms` is a real press
    ///
    /// The first event is always accepted. The tick may wrap around `u32`.
    pub fn accept(&mut self, now_ms: u32) -> bool {
        let too_soon = self
            .last_accepted
            .is_some_and(|last| now_ms.wrapping_sub(last) < self.threshold_ms);
        if too_soon {
            log::trace!("debounce: dropped event at {now_ms} ms");
            return false;
        }
        self.last_accepted = Some(now_ms);
        true
    }

    /// Forget the last accepted event
    pub fn reset(&mut self) {
        self.last_accepted = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_event_accepted() {
        let mut debouncer = Debouncer::default();
        assert_eq!(debouncer.threshold_ms(), DEFAULT_THRESHOLD_MS);
        assert!(debouncer.accept(0));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let mut debouncer = Debouncer::new(20);
        assert!(debouncer.accept(100));
        assert!(!debouncer.accept(119));
        assert!(debouncer.accept(120));
    }

    #[test]
    fn test_rejected_events_do_not_restart_window() {
        let mut debouncer = Debouncer::new(200);
        assert!(debouncer.accept(0));
        assert!(!debouncer.accept(150));
        assert!(!debouncer.accept(199));
        assert!(debouncer.accept(200));
    }

    #[test]
    fn test_tick_wraparound() {
        let mut debouncer = Debouncer::new(200);
        assert!(debouncer.accept(u32::MAX - 50));
        assert!(!debouncer.accept(100));
        assert!(debouncer.accept(150));
    }

    #[test]
    fn test_reset_accepts_next_event() {
        let mut debouncer = Debouncer::new(200);
        assert!(debouncer.accept(10));
        debouncer.reset();
        assert!(debouncer.accept(20));
    }
}
