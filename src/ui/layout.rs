//! Fixed row layout of the plugin pane.
//!
//! Rows are 1-indexed, matching the ANSI cursor positioning used by the
//! components. The event handler uses the same constants to map mouse clicks
//! back to list items and the clear-results button.
//!
//! ```text
//!  1  (blank)
//!  2  header
//!  3  ────────
//!  4  ┌───────────────┐
//!  5  │ Country: ...  │
//!  6  └───────────────┘
//!  7  notification
//!  8  ────────
//!  9  [ Clear results ]   or first list item / detail line
//! 10  (blank)
//! 11  detail panel
//!     ...
//! n-2 ────────
//! n-1 footer
//! ```

/// Row of the header title.
pub const HEADER_ROW: usize = 2;

/// Row of the border under the header.
pub const HEADER_BORDER_ROW: usize = 3;

/// First row of the three-line search box.
pub const SEARCH_BAR_ROW: usize = 4;

/// Row of the notification line.
pub const NOTIFICATION_ROW: usize = 7;

/// Row of the border above the output regions.
pub const REGION_BORDER_ROW: usize = 8;

/// First row of the output regions.
pub const REGION_START_ROW: usize = 9;

/// Rows taken by the clear-results button and the gap below it.
const CLEAR_BUTTON_HEIGHT: usize = 2;

/// Rows reserved at the bottom: border, footer and the last pane row.
const FOOTER_HEIGHT: usize = 3;

/// Row of the clear-results button when it is attached.
#[must_use]
pub const fn clear_button_row() -> usize {
    REGION_START_ROW
}

/// First row of list items or detail lines.
#[must_use]
pub const fn content_start_row(clear_control: bool) -> usize {
    if clear_control {
        REGION_START_ROW + CLEAR_BUTTON_HEIGHT
    } else {
        REGION_START_ROW
    }
}

/// Row of the footer; the border sits right above it.
#[must_use]
pub const fn footer_row(total_rows: usize) -> usize {
    total_rows.saturating_sub(1)
}

/// Number of rows available for list items or detail lines.
#[must_use]
pub const fn content_rows(total_rows: usize, clear_control: bool) -> usize {
    total_rows
        .saturating_sub(FOOTER_HEIGHT)
        .saturating_sub(content_start_row(clear_control) - 1)
}
