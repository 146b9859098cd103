//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! plugin shim executes them in order with the matching Zellij API calls,
//! keeping the library free of host calls and fully testable.

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Arms a host timer.
    ///
    /// Its expiry must be fed back as [`crate::app::Event::DebounceElapsed`].
    ScheduleTimer {
        /// Delay before the timer expires, in milliseconds.
        delay_ms: u64,
    },

    /// Requests a country name search from the host.
    ///
    /// The completion must be fed back as [`crate::app::Event::FetchCompleted`]
    /// carrying the same `generation`.
    FetchCountries {
        /// Fully built request URL.
        url: String,
        /// Validated query text, carried for logging.
        query: String,
        /// Request generation used to discard stale responses.
        generation: u64,
    },
}
