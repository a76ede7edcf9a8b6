//! Line composition: one display row, one horizontal window.

use crate::layout::GridLayout;
use crate::render::cache::{CellKey, LruCache};
use crate::render::cell::render_cell;
use crate::segment::{self, Line};
use crate::table::Table;
use crate::types::Style;

/// Immutable inputs shared by every line of one render pass.
pub(crate) struct LineContext<'a> {
    pub table: &'a Table,
    pub layout: &'a GridLayout,
    pub show_header: bool,
    pub fixed_columns: usize,
    pub header_style: Style,
    /// Output width of every composed line.
    pub width: usize,
}

/// Compose display row `y` for the absolute cell window `[x1, x2)`.
///
/// The full virtual row is assembled from cached cell renders, the pinned
/// prefix is styled and exempted from horizontal scrolling, and the result
/// is padded or cropped to exactly `ctx.width` cells. The header style is
/// layered over the whole line when `y` is the header row.
pub(crate) fn compose_line(
    ctx: &LineContext<'_>,
    cache: &mut LruCache<CellKey, Line>,
    y: usize,
    x1: usize,
    x2: usize,
) -> Line {
    if x1 >= x2 || ctx.width == 0 {
        return Vec::new();
    }

    let mut full: Line = Vec::new();
    let mut fixed: Line = Vec::new();
    for column in ctx.table.columns() {
        if !column.visible {
            continue;
        }
        let key = CellKey {
            row: y,
            column: column.index,
        };
        let cell = cache.get_or_insert_with(key, || {
            let row = ctx.table.logical_row(y, ctx.show_header);
            render_cell(row.cell_text(column.index).as_ref(), column.width)
        });
        if column.index < ctx.fixed_columns {
            fixed.extend(cell.iter().cloned());
        }
        full.extend(cell);
    }

    let fixed_width = ctx.layout.fixed_prefix_width(ctx.fixed_columns);
    let mut line = segment::apply_style(&fixed, ctx.header_style);
    line.extend(segment::crop_line(
        &full,
        x1.saturating_add(fixed_width),
        x2,
    ));
    let mut line = segment::adjust_line_length(line, ctx.width, Style::default());

    if y == 0 && ctx.show_header {
        line = segment::apply_style(&line, ctx.header_style);
    }
    line
}
