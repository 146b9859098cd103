//! View and permission state types.
//!
//! The view mode is derived from the output regions; it is never stored, so it
//! cannot disagree with what the regions actually hold.
//!
//! ```text
//! Empty ──list result──▶ List ──select item──▶ Detail
//!   ▲                      │                      │
//!   └──── keystroke / clear results ◀─────────────┘
//! ```

use super::regions::Regions;

/// Which output region is currently populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Both regions are empty.
    Empty,

    /// The list region shows two or more matches.
    ///
    /// Up/Down move the cursor, Enter or a click opens an item.
    List,

    /// The detail region shows one country with the clear-results control.
    Detail,
}

impl ViewMode {
    #[must_use]
    pub fn of(regions: &Regions) -> Self {
        if regions.detail.is_some() {
            Self::Detail
        } else if regions.list.is_empty() {
            Self::Empty
        } else {
            Self::List
        }
    }
}

/// Host permission to perform web requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebAccess {
    /// Requested on load, no answer yet.
    Pending,
    Granted,
    Denied,
}
