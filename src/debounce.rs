//! Single-slot cancellable save timer.
//!
//! The session coalesces keystroke-driven mutations into at most one
//! storage write per idle gap: every mutation resets the deadline, and the
//! write fires only once the gap has elapsed with no further mutations.
//! The timer is purely passive: it records a deadline and answers "is it
//! due?", so the crate stays single-threaded and tests can drive it with
//! synthetic instants instead of sleeping.

use std::time::{Duration, Instant};

/// Default idle gap before a pending save fires.
pub const DEFAULT_SAVE_GAP: Duration = Duration::from_millis(400);

#[derive(Debug)]
pub struct SaveTimer {
    gap: Duration,
    deadline: Option<Instant>,
}

impl SaveTimer {
    pub fn new(gap: Duration) -> Self {
        Self {
            gap,
            deadline: None,
        }
    }

    pub fn gap(&self) -> Duration {
        self.gap
    }

    /// Schedule (or reschedule) the deadline to `now + gap`. A pending
    /// deadline is replaced, not queued.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.gap);
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn is_due(&self, now: Instant) -> bool {
        matches!(self.deadline, Some(d) if now >= d)
    }

    /// Clear the slot. Returns whether a deadline was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }
}

impl Default for SaveTimer {
    fn default() -> Self {
        Self::new(DEFAULT_SAVE_GAP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_timer_is_never_due() {
        let timer = SaveTimer::default();
        assert!(!timer.is_pending());
        assert!(!timer.is_due(Instant::now()));
    }

    #[test]
    fn test_due_only_after_gap() {
        let mut timer = SaveTimer::new(Duration::from_millis(400));
        let t0 = Instant::now();

        timer.schedule(t0);
        assert!(timer.is_pending());
        assert!(!timer.is_due(t0));
        assert!(!timer.is_due(t0 + Duration::from_millis(399)));
        assert!(timer.is_due(t0 + Duration::from_millis(400)));
    }

    #[test]
    fn test_reschedule_replaces_deadline() {
        let mut timer = SaveTimer::new(Duration::from_millis(400));
        let t0 = Instant::now();

        timer.schedule(t0);
        // A later mutation pushes the deadline out
        timer.schedule(t0 + Duration::from_millis(300));

        assert!(!timer.is_due(t0 + Duration::from_millis(400)));
        assert!(timer.is_due(t0 + Duration::from_millis(700)));
    }

    #[test]
    fn test_cancel_clears_slot() {
        let mut timer = SaveTimer::default();
        assert!(!timer.cancel());

        timer.schedule(Instant::now());
        assert!(timer.cancel());
        assert!(!timer.is_pending());
    }
}
