//! Mutation operations, each paired with its cache-invalidation duty.
//!
//! The render cache is keyed by `(display_row, column_index)`, so the
//! eviction scope of each mutation follows from which of those coordinates
//! it can affect.

use log::{debug, trace};

use crate::error::Result;
use crate::layout::GridLayout;
use crate::render::cache::CellKey;
use crate::types::CellValue;

use super::GridView;

impl GridView {
    /// Append a column with the default width; returns its index.
    pub fn add_column(&mut self, label: impl Into<String>) -> usize {
        let index = self.table.add_column(label);
        self.reshape();
        index
    }

    /// Append a column with an explicit width; returns its index.
    ///
    /// # Errors
    /// `InvalidWidth` if `width` is zero.
    pub fn add_column_with_width(
        &mut self,
        label: impl Into<String>,
        width: usize,
    ) -> Result<usize> {
        let index = self.table.add_column_with_width(label, width)?;
        self.reshape();
        Ok(index)
    }

    /// Append a row; returns its key.
    ///
    /// Evicts the row's own display line: a speculative render of that line
    /// (a pinned row requested before the data existed) may already be
    /// cached as blanks.
    ///
    /// # Errors
    /// `ShapeMismatch` if the value count differs from the column count.
    pub fn add_row<I, T>(&mut self, values: I) -> Result<usize>
    where
        I: IntoIterator<Item = T>,
        T: Into<CellValue>,
    {
        let key = self.table.add_row(values)?;
        let display_row = key + usize::from(self.config.show_header);
        self.cache.retain(|k| k.row != display_row);
        trace!("added row {key}, evicted display row {display_row}");
        Ok(key)
    }

    /// Replace one cell's value, evicting its cached render.
    ///
    /// # Errors
    /// `OutOfRange` if no cell exists at the coordinate.
    pub fn update_cell(
        &mut self,
        row: usize,
        column: usize,
        value: impl Into<CellValue>,
    ) -> Result<()> {
        self.table.update_cell(row, column, value)?;
        let display_row = row + usize::from(self.config.show_header);
        self.cache.remove(&CellKey {
            row: display_row,
            column,
        });
        Ok(())
    }

    /// Change one column's display width, evicting every cached cell in
    /// that column.
    ///
    /// # Errors
    /// `NoSuchColumn` for a bad index, `InvalidWidth` for a zero width.
    pub fn set_column_width(&mut self, column: usize, width: usize) -> Result<()> {
        self.table.set_column_width(column, width)?;
        self.layout = GridLayout::new(self.table.columns());
        self.cache.retain(|k| k.column != column);
        debug!("column {column} resized to {width}");
        Ok(())
    }

    /// Show or hide a column. Cached renders stay valid (hidden columns are
    /// skipped at composition time), only the layout changes.
    ///
    /// # Errors
    /// `NoSuchColumn` for a bad index.
    pub fn set_column_visible(&mut self, column: usize, visible: bool) -> Result<()> {
        self.table.set_column_visible(column, visible)?;
        self.layout = GridLayout::new(self.table.columns());
        Ok(())
    }

    /// Toggle the header band. Clears the cache when the flag changes: the
    /// display-row mapping shifts by one.
    pub fn set_show_header(&mut self, show: bool) {
        if self.config.show_header != show {
            self.config.show_header = show;
            self.cache.clear();
        }
    }

    pub fn set_fixed_rows(&mut self, rows: usize) {
        self.config.fixed_rows = rows;
    }

    pub fn set_fixed_columns(&mut self, columns: usize) {
        self.config.fixed_columns = columns;
    }

    /// Drop every cached cell render. Purely a performance event; the next
    /// render pass recomputes misses.
    pub fn clear_render_cache(&mut self) {
        self.cache.clear();
    }

    /// Column mutations change display geometry; rebuild the layout and
    /// start the cache fresh.
    fn reshape(&mut self) {
        self.layout = GridLayout::new(self.table.columns());
        self.cache.clear();
        debug!(
            "columns changed: {} defined, cache cleared",
            self.table.columns().len()
        );
    }
}
