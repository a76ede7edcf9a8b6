//! The [`GridView`] facade: table, layout, and render cache behind one type.
//!
//! Mutations and rendering go through the same owner so cache invalidation
//! is enforced structurally: a mutation that can change a cell's rendered
//! output always evicts the affected entries before it returns (see the
//! operations in `mutate`).

mod mutate;

use serde::{Deserialize, Serialize};

use crate::layout::{virtual_size, GridLayout, Size};
use crate::render::cache::{CellKey, LruCache};
use crate::render::line::{compose_line, LineContext};
use crate::render::{RenderParams, DEFAULT_CACHE_CAPACITY};
use crate::segment::{self, Line};
use crate::table::Table;

/// View configuration, serde-derived so hosts can load it from config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Render a header band as display row 0.
    pub show_header: bool,
    /// Rows pinned to the top edge, exempt from vertical scrolling.
    pub fixed_rows: usize,
    /// Columns pinned to the left edge, exempt from horizontal scrolling.
    pub fixed_columns: usize,
    /// Per-cell render cache capacity; 0 disables caching.
    pub cache_capacity: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            show_header: true,
            fixed_rows: 1,
            fixed_columns: 0,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

/// A virtualized grid view over a [`Table`].
pub struct GridView {
    pub(crate) table: Table,
    pub(crate) layout: GridLayout,
    pub(crate) cache: LruCache<CellKey, Line>,
    pub(crate) config: ViewConfig,
}

impl Default for GridView {
    fn default() -> Self {
        Self::new()
    }
}

impl GridView {
    pub fn new() -> Self {
        Self::with_config(ViewConfig::default())
    }

    pub fn with_config(config: ViewConfig) -> Self {
        Self {
            table: Table::new(),
            layout: GridLayout::default(),
            cache: LruCache::new(config.cache_capacity),
            config,
        }
    }

    /// Read access to the underlying model.
    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Total logical content dimensions (the scrollbar extent).
    pub fn virtual_size(&self) -> Size {
        virtual_size(
            self.table.columns(),
            self.table.row_count(),
            self.config.show_header,
        )
    }

    /// Render the requested viewport to styled lines.
    ///
    /// `line_range` and `column_range` are translated by `params.scroll`;
    /// rows `[0, fixed_rows)` and the first `fixed_columns` columns render
    /// at fixed positions regardless of the offsets. Every returned line is
    /// exactly `column_range.1 - column_range.0` cells wide, padded with
    /// `base_style` blanks where the table runs out of content.
    ///
    /// This path never fails: a degenerate column window yields an empty
    /// result and out-of-range rows render blank.
    pub fn render_viewport(&mut self, params: &RenderParams) -> Vec<Line> {
        let (x1, x2) = params.column_range;
        if x1 >= x2 {
            return Vec::new();
        }
        let width = x2 - x1;
        let (scroll_x, scroll_y) = params.scroll;
        let ax1 = x1.saturating_add(scroll_x);
        let ax2 = x2.saturating_add(scroll_x);
        let (y1, y2) = params.line_range;
        let ay1 = y1.saturating_add(scroll_y);
        let ay2 = y2.saturating_add(scroll_y);

        let fixed_rows = self.config.fixed_rows;
        let ctx = LineContext {
            table: &self.table,
            layout: &self.layout,
            show_header: self.config.show_header,
            fixed_columns: self.config.fixed_columns,
            header_style: params.header_style,
            width,
        };

        let mut lines: Vec<Line> = Vec::new();
        for y in 0..fixed_rows {
            lines.push(compose_line(&ctx, &mut self.cache, y, ax1, ax2));
        }
        // The first `fixed_rows` of the scrolled window are superseded by
        // the pinned copies above, so they are skipped rather than drawn
        // twice.
        for y in (ay1..ay2).skip(fixed_rows) {
            lines.push(compose_line(&ctx, &mut self.cache, y, ax1, ax2));
        }

        lines
            .into_iter()
            .map(|line| segment::apply_style(&line, params.base_style))
            .collect()
    }
}
