//! Pre-computed column geometry for a grid.
//!
//! Edges are recomputed once per column mutation, giving O(1) prefix-width
//! lookups during composition and O(log n) column hit testing for hosts
//! that map pointer positions back to columns.

use serde::{Deserialize, Serialize};

use crate::types::Column;

/// Width assigned by `add_column` when the caller does not specify one.
pub const DEFAULT_COLUMN_WIDTH: usize = 10;

/// Total logical (unscrolled) content dimensions of a grid, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

/// Virtual content size: summed visible column widths by row count, plus
/// one line for the header when shown.
pub fn virtual_size(columns: &[Column], row_count: usize, header_visible: bool) -> Size {
    let width = columns
        .iter()
        .filter(|c| c.visible)
        .map(|c| c.width)
        .sum();
    Size {
        width,
        height: row_count + usize::from(header_visible),
    }
}

/// Cumulative column positions for one grid.
#[derive(Debug, Clone, Default)]
pub struct GridLayout {
    /// `edges[i]` is the left edge of column `i`; the final entry is the
    /// total width. Hidden columns occupy zero cells.
    edges: Vec<usize>,
}

impl GridLayout {
    pub fn new(columns: &[Column]) -> Self {
        let mut edges = Vec::with_capacity(columns.len() + 1);
        let mut x = 0usize;
        for column in columns {
            edges.push(x);
            if column.visible {
                x += column.width;
            }
        }
        edges.push(x);
        Self { edges }
    }

    /// Total width of all visible columns.
    pub fn total_width(&self) -> usize {
        self.edges.last().copied().unwrap_or(0)
    }

    /// Combined width of the first `n` columns (the pinned prefix).
    pub fn fixed_prefix_width(&self, n: usize) -> usize {
        let clamped = n.min(self.edges.len().saturating_sub(1));
        self.edges.get(clamped).copied().unwrap_or(0)
    }

    /// Column containing display cell `x`, if any. Zero-width (hidden)
    /// columns never win the lookup.
    pub fn col_at_x(&self, x: usize) -> Option<usize> {
        if x >= self.total_width() {
            return None;
        }
        let i = self.edges.partition_point(|&edge| edge <= x);
        i.checked_sub(1)
    }
}
