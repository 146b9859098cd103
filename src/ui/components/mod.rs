//! Composable UI component renderers.
//!
//! Each component prints one part of the pane at a given row and returns the
//! next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`search`]: Query field box with pending indicator
//! - [`notification`]: Severity-colored message line
//! - [`clear_button`]: Clear-results control
//! - [`list`]: Country list with query highlighting
//! - [`detail`]: Single-country detail panel
//! - [`empty`]: Hint shown when nothing is displayed
//! - [`footer`]: Keybinding hints
//!
//! Rows follow the fixed layout in [`crate::ui::layout`].

mod clear_button;
mod detail;
mod empty;
mod footer;
mod header;
mod list;
mod notification;
mod search;

use crate::ui::helpers::position_cursor;
use crate::ui::layout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use clear_button::render_clear_button;
use detail::render_detail;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use list::render_list;
use notification::render_notification;
use search::render_search_bar;

/// Renders a horizontal border line at `row` and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the whole pane.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines]
/// [Notification]
/// [Border]
/// [Clear button + blank]   only with a detail panel
/// [List | Detail | Empty state]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = layout::HEADER_ROW;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, &vm.search_bar, theme, cols);
    current_row = render_notification(current_row, vm.notification.as_ref(), theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    if let Some(button) = &vm.clear_button {
        current_row = render_clear_button(current_row, button, theme);
    }

    let content_rows = layout::content_rows(rows, vm.clear_button.is_some());
    if let Some(panel) = &vm.detail {
        render_detail(current_row, panel, theme, cols, content_rows);
    } else if !vm.list_items.is_empty() {
        render_list(current_row, &vm.list_items, theme, cols);
    } else if let Some(empty) = &vm.empty_state {
        if content_rows >= 3 {
            render_empty_state(current_row, empty, theme, cols);
        }
    }

    let footer_row = layout::footer_row(rows);
    if footer_row > current_row {
        render_border(footer_row - 1, &theme.colors.border, cols);
        render_footer(footer_row, &vm.footer, theme, cols);
    }
}
