//! Notification line renderer.

use crate::app::notification::{Notification, Severity};
use crate::ui::helpers::{position_cursor, text_width, truncate};
use crate::ui::theme::Theme;

const fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "ℹ",
        Severity::Failure => "✗",
        Severity::Success => "✓",
    }
}

/// Renders the notification line at `row`, colored by severity.
///
/// An absent notification leaves the row blank. Returns the next row.
pub fn render_notification(
    row: usize,
    notification: Option<&Notification>,
    theme: &Theme,
    cols: usize,
) -> usize {
    position_cursor(row, 1);

    let Some(notification) = notification else {
        print!("{}", " ".repeat(cols));
        return row + 1;
    };

    let line = format!("  {} {}", severity_icon(notification.severity), notification.message);
    let line = truncate(&line, cols);

    print!("{}", Theme::fg(theme.colors.notification_fg(notification.severity)));
    print!("{line}");
    print!("{}", " ".repeat(cols.saturating_sub(text_width(&line))));
    print!("{}", Theme::reset());
    row + 1
}
