//! Rendering: the per-cell LRU cache, cell shaping, and line composition.

pub mod cache;
pub(crate) mod cell;
pub(crate) mod line;

pub use cache::{CellKey, LruCache, DEFAULT_CACHE_CAPACITY};

use crate::types::Style;

/// Per-call inputs to [`GridView::render_viewport`](crate::GridView).
///
/// Scroll offsets and the active styles are threaded explicitly; the
/// renderer performs no ambient lookups.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderParams {
    /// Vertical display-row window `[y1, y2)`, before scroll translation.
    pub line_range: (usize, usize),
    /// Horizontal cell window `[x1, x2)`, before scroll translation.
    /// Every output line is exactly `x2 - x1` cells wide.
    pub column_range: (usize, usize),
    /// `(scroll_x, scroll_y)` offsets added to both ranges.
    pub scroll: (usize, usize),
    /// Emphasis style for the header band and pinned columns.
    pub header_style: Style,
    /// Ambient style layered under every output line.
    pub base_style: Style,
}
