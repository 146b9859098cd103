//! Footer component renderer.
//!
//! Renders the help bar with centered keybinding hints. Text wider than the
//! pane is truncated so narrow panes keep their layout.

use crate::ui::helpers::render_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer help bar at `row` and returns the next row.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    print!("{}", Theme::fg(&theme.colors.text_dim));
    render_centered(row, &footer.keybindings, cols);
    row + 1
}
