//! Search bar component renderer.
//!
//! Renders the query field as a bordered 3-line box. While a lookup is
//! pending (debounce armed or fetch in flight) a dim indicator is shown at
//! the right edge of the box.

use crate::ui::helpers::{position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

const PROMPT: &str = " Country: ";
const CURSOR: &str = "▏";
const SEARCHING: &str = "searching… ";

/// Renders the search input box at `row`.
///
/// ```text
/// [margin] ┌──────────────────────────────┐ [margin]
/// [margin] │ Country: peru▏   searching… │ [margin]
/// [margin] └──────────────────────────────┘ [margin]
/// ```
///
/// Returns the row after the box (`row + 3`).
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let indicator = if search.is_searching { SEARCHING } else { "" };
    let query_width = inner_width
        .saturating_sub(text_width(PROMPT) + text_width(CURSOR) + text_width(indicator));
    let query = truncate(&search.query, query_width);
    let used = text_width(PROMPT) + text_width(&query) + text_width(CURSOR) + text_width(indicator);

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{PROMPT}{query}{CURSOR}");
    print!("{}", " ".repeat(inner_width.saturating_sub(used)));
    print!("{}{indicator}", Theme::fg(&theme.colors.text_dim));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
