//! Shared helpers for the integration suites.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use gridline::{Color, GridView, Line, RenderParams, Style};

/// Two columns (Name, width 10; Age, width 5) and one data row.
pub fn sample_view() -> GridView {
    let mut view = GridView::new();
    view.add_column_with_width("Name", 10).unwrap();
    view.add_column_with_width("Age", 5).unwrap();
    view.add_row(["Alice", "30"]).unwrap();
    view
}

/// A grid of `cols` columns, each `width` cells, with `rows` data rows of
/// addressable content (`r{row}c{col}`).
pub fn grid(cols: usize, width: usize, rows: usize) -> GridView {
    let mut view = GridView::new();
    for c in 0..cols {
        view.add_column_with_width(format!("col{c}"), width).unwrap();
    }
    for r in 0..rows {
        view.add_row((0..cols).map(|c| format!("r{r}c{c}"))).unwrap();
    }
    view
}

/// Flatten a styled line to its text.
pub fn line_text(line: &Line) -> String {
    line.iter().map(|seg| seg.text.as_str()).collect()
}

/// Render and flatten every line to text.
pub fn render_text(view: &mut GridView, params: &RenderParams) -> Vec<String> {
    view.render_viewport(params)
        .iter()
        .map(line_text)
        .collect()
}

/// A request for display rows `[y1, y2)` and cells `[x1, x2)`, no scroll,
/// no styling.
pub fn window(lines: (usize, usize), columns: (usize, usize)) -> RenderParams {
    RenderParams {
        line_range: lines,
        column_range: columns,
        ..RenderParams::default()
    }
}

/// A distinctive emphasis style for header assertions.
pub fn header_style() -> Style {
    Style::default().bold().with_fg(Color::rgb(255, 255, 255))
}
