//! Clear-results button renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ClearButtonInfo;

/// Renders the button at `row` followed by one blank row.
///
/// The button row must match `layout::clear_button_row`, which is where
/// clicks are resolved to it.
pub fn render_clear_button(row: usize, button: &ClearButtonInfo, theme: &Theme) -> usize {
    position_cursor(row, 3);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.button_fg));
    print!("{}", Theme::bg(&theme.colors.button_bg));
    print!("{}", button.label);
    print!("{}", Theme::reset());
    row + 2
}
