//! Country list renderer.
//!
//! One row per country: selection marker, flag glyph and the name with the
//! characters matching the query highlighted. The row order is the order
//! click targets are resolved in, see `AppState::target_at_row`.

use crate::ui::helpers::{self, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ListItem;

const SELECTED_MARKER: &str = "▶ ";
const UNSELECTED_MARKER: &str = "  ";

/// Renders all items from `row` downwards and returns the next free row.
pub fn render_list(row: usize, items: &[ListItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_list_item(current_row, item, theme, cols);
    }
    current_row
}

fn render_list_item(row: usize, item: &ListItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        print!("{SELECTED_MARKER}");
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{UNSELECTED_MARKER}");
    }

    print!("{}  ", item.flag);
    helpers::render_highlighted_text(&item.name, &item.highlight_ranges, theme, item.is_selected);

    let line_len = text_width(SELECTED_MARKER) + text_width(&item.flag) + 2 + text_width(&item.name);
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
