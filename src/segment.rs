//! Styled segments and line-level operations.
//!
//! A line of grid output is a `Vec<Segment>`: runs of text that each share
//! one style. The operations here are the text primitives the renderer is
//! built on: cropping a styled line to a horizontal window, padding or
//! truncating it to a fixed width, and layering a style under a run of
//! segments.
//!
//! All widths are Unicode display widths (via `unicode-width`), so CJK and
//! other double-width content crops correctly: a wide character split by a
//! crop boundary contributes a space rather than half a glyph.

use std::cmp::Ordering;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::types::Style;

/// A run of characters sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub style: Style,
}

/// One rendered output row.
pub type Line = Vec<Segment>;

impl Segment {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// A run of `width` spaces in the given style.
    pub fn blank(width: usize, style: Style) -> Self {
        Self {
            text: " ".repeat(width),
            style,
        }
    }

    /// Display width in character cells.
    pub fn width(&self) -> usize {
        UnicodeWidthStr::width(self.text.as_str())
    }
}

/// Total display width of a line.
pub fn line_width(line: &[Segment]) -> usize {
    line.iter().map(Segment::width).sum()
}

/// Layer `style` under every segment of a line.
///
/// Each segment keeps its own set fields; unset fields fall back to `style`
/// (see [`Style::over`]). Applying an emphasis style to unstyled cell
/// content therefore shows the emphasis, while explicitly styled content is
/// preserved.
pub fn apply_style(line: &[Segment], style: Style) -> Line {
    if style.is_empty() {
        return line.to_vec();
    }
    line.iter()
        .map(|seg| Segment {
            text: seg.text.clone(),
            style: seg.style.over(style),
        })
        .collect()
}

/// Crop a styled line to the display-cell window `[start, end)`.
///
/// Segments straddling a boundary are split at character level; a
/// double-width character cut in half contributes spaces for the cells that
/// remain inside the window.
pub fn crop_line(line: &[Segment], start: usize, end: usize) -> Line {
    if start >= end {
        return Vec::new();
    }
    let mut out: Line = Vec::new();
    let mut pos = 0usize;
    for seg in line {
        if pos >= end {
            break;
        }
        let seg_end = pos + seg.width();
        if seg_end <= start {
            pos = seg_end;
            continue;
        }
        if pos >= start && seg_end <= end {
            out.push(seg.clone());
            pos = seg_end;
            continue;
        }
        if let Some(part) = crop_segment(seg, pos, start, end) {
            out.push(part);
        }
        pos = seg_end;
    }
    out
}

/// Character-level crop of one segment whose cells begin at `pos`.
fn crop_segment(seg: &Segment, pos: usize, start: usize, end: usize) -> Option<Segment> {
    let mut text = String::new();
    let mut cell = pos;
    for ch in seg.text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        let ch_start = cell;
        let ch_end = cell + w;
        cell = ch_end;
        if ch_start >= end {
            break;
        }
        if ch_end <= start {
            continue;
        }
        if ch_start >= start && ch_end <= end {
            text.push(ch);
        } else {
            // wide character straddling a crop boundary
            for _ in ch_start.max(start)..ch_end.min(end) {
                text.push(' ');
            }
        }
    }
    if text.is_empty() {
        None
    } else {
        Some(Segment {
            text,
            style: seg.style,
        })
    }
}

/// Pad with spaces or crop so the line is exactly `width` cells.
///
/// Never fails on mismatched lengths: short lines get a trailing run of
/// `pad_style` spaces, long lines are cropped from the right.
pub fn adjust_line_length(line: Line, width: usize, pad_style: Style) -> Line {
    let current = line_width(&line);
    match current.cmp(&width) {
        Ordering::Equal => line,
        Ordering::Less => {
            let mut out = line;
            out.push(Segment::blank(width - current, pad_style));
            out
        }
        Ordering::Greater => crop_line(&line, 0, width),
    }
}
