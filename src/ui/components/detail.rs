//! Detail panel renderer.
//!
//! The text itself comes from [`DetailPanel`]; this module only styles it:
//! the country name in bold, attribute labels in bold `label_fg`.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailPanel;

/// Left margin of the panel.
const INDENT: &str = "  ";

/// Renders the panel from `row`, using at most `max_rows` rows.
///
/// Returns the next free row.
pub fn render_detail(row: usize, panel: &DetailPanel, theme: &Theme, cols: usize, max_rows: usize) -> usize {
    if max_rows == 0 {
        return row;
    }
    let width = cols.saturating_sub(INDENT.len());

    position_cursor(row, 1);
    print!("{INDENT}{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{}", truncate(&format!("{} {}", panel.flag, panel.name), width));
    print!("{}", Theme::reset());

    let mut current_row = row + 1;
    for (label, value) in panel.attribute_lines().into_iter().take(max_rows - 1) {
        position_cursor(current_row, 1);
        print!("{INDENT}{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.label_fg));
        print!("{label}:");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!(" {}", truncate(&value, width.saturating_sub(label.len() + 2)));
        print!("{}", Theme::reset());
        current_row += 1;
    }
    current_row
}
