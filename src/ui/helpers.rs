//! Shared rendering utilities and helpers.
//!
//! Low-level printing helpers used across components: cursor positioning,
//! centered lines and query match highlighting. Widths are counted in chars,
//! never bytes, so country names with accents pad correctly.

use crate::ui::theme::Theme;

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Display width of `text` in terminal columns, counted per char.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `width` columns, marking the cut with `...`.
///
/// # Example
///
/// ```rust
/// use zcountry::ui::helpers::truncate;
///
/// assert_eq!(truncate("Saint Vincent and the Grenadines", 12), "Saint Vin...");
/// assert_eq!(truncate("Peru", 12), "Peru");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text_width(text) <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let kept: String = text.chars().take(width - 3).collect();
    format!("{kept}...")
}

/// Prints `text` centered on `row`, padded to the full pane width.
///
/// The caller sets colors beforehand; styling is reset afterwards.
pub fn render_centered(row: usize, text: &str, cols: usize) {
    let text = truncate(text, cols);
    let width = text_width(&text);
    let padding = cols.saturating_sub(width) / 2;

    position_cursor(row, 1);
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + width)));
    print!("{}", Theme::reset());
}

/// Renders text with highlighted character ranges for query matches.
///
/// Ranges are `(start, end)` char indices, end exclusive. Ranges past the end
/// of `text` are clipped. After each highlighted section the row's own colors
/// are restored: selection colors when `is_selected`, normal text otherwise.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.clamp(current_pos, chars.len());
        let end = end.clamp(start, chars.len());

        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());

        if is_selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width_counts_chars() {
        assert_eq!(text_width("Côte d'Ivoire"), 13);
        assert_eq!(text_width("Åland Islands"), 13);
    }

    #[test]
    fn test_truncate_narrow() {
        assert_eq!(truncate("Peru", 2), "Pe");
        assert_eq!(truncate("Peru", 0), "");
        assert_eq!(truncate("Réunion", 6), "Réu...");
    }
}
