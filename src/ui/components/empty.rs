//! Empty state component renderer.
//!
//! Shown in place of the output regions when neither holds anything and no
//! lookup is pending.

use crate::ui::helpers::render_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the two-line empty state message starting at `row`.
///
/// ```text
/// [blank]
/// [left padding] MESSAGE [right padding]
/// [left padding] subtitle [right padding]
/// ```
///
/// The message uses `empty_state_fg`, the subtitle `text_dim` with dim
/// styling.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    render_centered(row + 1, &empty.message, cols);

    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    render_centered(row + 2, &empty.subtitle, cols);

    row + 3
}
