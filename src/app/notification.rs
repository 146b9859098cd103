//! One-line user notifications.
//!
//! Notifications replace the toast collaborator of a browser widget: a single
//! severity-tagged message shown under the search bar until the next keystroke
//! or the next notification.

/// Shown when the query contains anything but letters and whitespace.
pub const LETTERS_ONLY: &str = "You can use only letters and spaces";

/// Shown when the lookup fails or matches nothing.
pub const NO_SUCH_COUNTRY: &str = "Oops, there is no country with that name";

/// Shown when the result set is too large to list.
pub const TOO_MANY_MATCHES: &str = "Too many matches found. Please enter a more specific name.";

/// Shown once the host grants web access.
pub const WEB_ACCESS_GRANTED: &str = "Ready. Start typing a country name.";

/// Shown when a lookup is attempted without web access.
pub const WEB_ACCESS_MISSING: &str = "Web access has not been granted to this plugin";

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Failure,
    Success,
}

/// A severity-tagged one-line message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self { severity: Severity::Info, message: message.into() }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self { severity: Severity::Failure, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { severity: Severity::Success, message: message.into() }
    }
}
