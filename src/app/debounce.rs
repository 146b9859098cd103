//! Keystroke debouncing on top of host timers.
//!
//! Zellij timers cannot be cancelled and their expiry event does not say which
//! timer fired. Every keystroke therefore arms a fresh timer of the same delay
//! and the debouncer counts how many are outstanding. Timers of equal delay
//! expire in the order they were armed, so the expiry that brings the count to
//! zero is exactly the one armed by the last keystroke: it lands one full delay
//! after the input went quiet, and every earlier expiry is swallowed.

use std::time::Duration;

/// Default quiescence interval before a query is looked up.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Counts outstanding debounce timers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer {
    delay: Duration,
    outstanding: usize,
}

impl Debouncer {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay, outstanding: 0 }
    }

    /// Registers a new timer and returns the delay it must be armed with.
    pub fn arm(&mut self) -> Duration {
        self.outstanding += 1;
        tracing::trace!(outstanding = self.outstanding, "debounce timer armed");
        self.delay
    }

    /// Records a timer expiry.
    ///
    /// Returns `true` only when the expiring timer is the last one armed, i.e.
    /// the input has been quiet for a full delay. Expiries with nothing
    /// outstanding (timers armed by something else) return `false`.
    pub fn expire(&mut self) -> bool {
        if self.outstanding == 0 {
            return false;
        }
        self.outstanding -= 1;
        self.outstanding == 0
    }

    /// Returns `true` while a keystroke is waiting for its quiet period.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.outstanding > 0
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
