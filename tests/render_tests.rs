//! Viewport rendering tests: composition, widths, padding, and styling.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

mod common;
use common::*;

use gridline::{Attrs, Color, ColorScheme, RenderParams, Style};
use test_case::test_case;

/// The canonical two-column table: header labels then one data row, every
/// cell padded to its column width.
#[test]
fn test_header_and_data_row() {
    let mut view = sample_view();
    let lines = render_text(&mut view, &window((0, 2), (0, 15)));
    assert_eq!(lines, vec![" Name      Age ", " Alice     30  "]);
}

/// Every output line is exactly the requested width, whatever the table's
/// own width happens to be.
#[test_case(5 ; "narrower than the table")]
#[test_case(15 ; "exactly the table width")]
#[test_case(40 ; "wider than the table")]
fn test_width_conservation(viewport_width: usize) {
    let mut view = sample_view();
    let lines = view.render_viewport(&window((0, 2), (0, viewport_width)));
    assert_eq!(lines.len(), 2);
    for line in &lines {
        assert_eq!(gridline::segment::line_width(line), viewport_width);
    }
}

/// Columns summing to less than the viewport leave a padded tail.
#[test]
fn test_short_table_is_padded() {
    let mut view = sample_view();
    let lines = render_text(&mut view, &window((0, 1), (0, 20)));
    assert_eq!(lines[0], " Name      Age      ");
}

/// A degenerate column window is an empty result, not an error.
#[test]
fn test_empty_column_window() {
    let mut view = sample_view();
    assert!(view.render_viewport(&window((0, 2), (7, 7))).is_empty());
    assert!(view.render_viewport(&window((0, 2), (9, 3))).is_empty());
}

/// An empty line range still yields the pinned band (the header row is
/// pinned by default).
#[test]
fn test_empty_line_range_keeps_pinned_rows() {
    let mut view = sample_view();
    let lines = render_text(&mut view, &window((0, 0), (0, 15)));
    assert_eq!(lines, vec![" Name      Age "]);
}

/// The header style covers the entire header line, including padding.
#[test]
fn test_header_row_styled() {
    let mut view = sample_view();
    let params = RenderParams {
        header_style: header_style(),
        ..window((0, 2), (0, 15))
    };
    let lines = view.render_viewport(&params);
    for seg in &lines[0] {
        assert!(seg.style.attrs.contains(Attrs::BOLD), "header segment unstyled");
    }
    for seg in &lines[1] {
        assert!(!seg.style.attrs.contains(Attrs::BOLD), "data segment styled");
    }
}

/// The base style fills unset fields everywhere but never overrides the
/// header emphasis.
#[test]
fn test_base_style_overlay_fills_under_header() {
    let scheme = ColorScheme {
        foreground: Color::rgb(200, 200, 200),
        background: Color::rgb(10, 10, 40),
    };
    let mut view = sample_view();
    let params = RenderParams {
        header_style: header_style(),
        base_style: Style::from(scheme),
        ..window((0, 2), (0, 15))
    };
    let lines = view.render_viewport(&params);
    // header keeps its own foreground and bold, gains the base background
    for seg in &lines[0] {
        assert_eq!(seg.style.fg, Some(Color::rgb(255, 255, 255)));
        assert_eq!(seg.style.bg, Some(scheme.background));
        assert!(seg.style.attrs.contains(Attrs::BOLD));
    }
    // data rows take the scheme wholesale
    for seg in &lines[1] {
        assert_eq!(seg.style.fg, Some(scheme.foreground));
        assert_eq!(seg.style.bg, Some(scheme.background));
    }
}

/// Hidden columns drop out of both composition and the virtual size.
#[test]
fn test_hidden_column_skipped() {
    let mut view = grid(3, 6, 1);
    view.set_fixed_rows(0);
    assert_eq!(view.virtual_size().width, 18);
    view.set_column_visible(1, false).unwrap();
    assert_eq!(view.virtual_size().width, 12);
    let lines = render_text(&mut view, &window((1, 2), (0, 12)));
    assert_eq!(lines, vec![" r0c0  r0c2 "]);
}

/// Double-width content is clipped per display cell, never mid-glyph.
#[test]
fn test_wide_content_renders_at_cell_granularity() {
    let mut view = gridline::GridView::new();
    view.set_fixed_rows(0);
    view.add_column_with_width("City", 7).unwrap();
    view.add_row(["東京都庁"]).unwrap();
    let lines = render_text(&mut view, &window((1, 2), (0, 7)));
    // 5 content cells hold two glyphs and a space for the half-covered third
    assert_eq!(lines, vec![" 東京  "]);
}

/// Requesting rows past the data renders blank lines of full width.
#[test]
fn test_rows_past_data_render_blank() {
    let mut view = sample_view();
    let lines = render_text(&mut view, &window((0, 5), (0, 15)));
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[2], " ".repeat(15));
    assert_eq!(lines[4], " ".repeat(15));
}
