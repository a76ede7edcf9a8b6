//! Shaping one cell's content into its fixed-width line.

use unicode_width::UnicodeWidthStr;

use crate::segment::{crop_line, Segment};
use crate::types::Style;

/// Horizontal padding inside each cell, in cells per side.
const CELL_PADDING: usize = 1;

/// Render `content` into a single unstyled run of exactly `width` display
/// cells: one blank padding cell each side, content clipped or space-padded
/// to the remainder. Widths too small to hold any content render as blanks.
///
/// Styling is deliberately absent here; emphasis and the ambient scheme are
/// layered on after the cached render, so one cached entry serves every
/// styling context.
pub(crate) fn render_cell(content: &str, width: usize) -> Vec<Segment> {
    let inner = width.saturating_sub(2 * CELL_PADDING);
    if inner == 0 {
        return vec![Segment::blank(width, Style::default())];
    }

    let mut text = String::with_capacity(content.len() + 2 * CELL_PADDING);
    for _ in 0..CELL_PADDING {
        text.push(' ');
    }
    let mut used = 0usize;
    if UnicodeWidthStr::width(content) <= inner {
        text.push_str(content);
        used = UnicodeWidthStr::width(content);
    } else {
        for part in crop_line(&[Segment::new(content, Style::default())], 0, inner) {
            used += part.width();
            text.push_str(&part.text);
        }
    }
    for _ in used..inner {
        text.push(' ');
    }
    for _ in 0..CELL_PADDING {
        text.push(' ');
    }
    vec![Segment::new(text, Style::default())]
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::panic)]
mod tests {
    use super::*;
    use crate::segment::line_width;
    use test_case::test_case;

    fn text(width: usize, content: &str) -> String {
        render_cell(content, width)
            .iter()
            .map(|s| s.text.as_str())
            .collect()
    }

    #[test_case(10, "Alice", " Alice    " ; "padded to width")]
    #[test_case(5, "30", " 30  " ; "short value")]
    #[test_case(5, "abcdefg", " abc " ; "clipped to content area")]
    #[test_case(3, "x", " x " ; "minimal content area")]
    #[test_case(2, "x", "  " ; "padding only")]
    #[test_case(1, "x", " " ; "single cell")]
    #[test_case(6, "", "      " ; "empty content")]
    fn test_render_cell(width: usize, content: &str, expected: &str) {
        assert_eq!(text(width, content), expected);
        assert_eq!(line_width(&render_cell(content, width)), width);
    }

    #[test]
    fn test_wide_content_clips_on_cell_boundary() {
        // "日本語" is 6 cells; a 5-wide content area keeps 2 glyphs plus a
        // space for the half-covered third
        assert_eq!(text(7, "日本語"), " 日本  ");
        assert_eq!(line_width(&render_cell("日本語", 7)), 7);
    }
}
