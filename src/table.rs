//! The table model: column definitions plus append-only row storage.
//!
//! Pure data, no rendering logic. Display-row resolution lives here because
//! only the model knows whether display row 0 is the header band.

use std::borrow::Cow;

use crate::error::{GridError, Result};
use crate::layout::DEFAULT_COLUMN_WIDTH;
use crate::types::{CellValue, Column};

/// A logical table: ordered columns plus rows keyed by insertion order.
///
/// Rows are never reordered or removed; a row's key is its position in the
/// append sequence, starting at 0.
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<CellValue>>,
}

/// The resolved content of one display row.
///
/// Display rows beyond the stored data resolve to `Blank`, a defined
/// fallback rather than an error, so callers can render speculative rows
/// (pinned rows requested before any data exists) without failing.
#[derive(Debug, Clone, Copy)]
pub enum LogicalRow<'a> {
    /// The header band: cell content is each column's label.
    Header(&'a [Column]),
    /// A stored data row.
    Data(&'a [CellValue]),
    /// No row stored at the resolved key.
    Blank,
}

impl<'a> LogicalRow<'a> {
    /// Display text for the cell at `column_index`; empty for blanks and
    /// out-of-range indices.
    pub fn cell_text(&self, column_index: usize) -> Cow<'a, str> {
        match self {
            Self::Header(columns) => columns
                .get(column_index)
                .map_or(Cow::Borrowed(""), |c| Cow::Borrowed(c.label.as_str())),
            Self::Data(cells) => match cells.get(column_index) {
                Some(CellValue::Text(s)) => Cow::Borrowed(s.as_str()),
                Some(CellValue::Empty) | None => Cow::Borrowed(""),
                Some(value) => Cow::Owned(value.to_string()),
            },
            Self::Blank => Cow::Borrowed(""),
        }
    }
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column with [`DEFAULT_COLUMN_WIDTH`]. Returns its index.
    pub fn add_column(&mut self, label: impl Into<String>) -> usize {
        let index = self.columns.len();
        self.columns
            .push(Column::new(label, DEFAULT_COLUMN_WIDTH, index));
        index
    }

    /// Append a column with an explicit width. Returns its index.
    ///
    /// # Errors
    /// `InvalidWidth` if `width` is zero; the column is not added.
    pub fn add_column_with_width(
        &mut self,
        label: impl Into<String>,
        width: usize,
    ) -> Result<usize> {
        if width < 1 {
            return Err(GridError::InvalidWidth { width });
        }
        let index = self.columns.len();
        self.columns.push(Column::new(label, width, index));
        Ok(index)
    }

    /// Append a row. Returns its key.
    ///
    /// # Errors
    /// `ShapeMismatch` if the value count differs from the column count.
    /// The failure is atomic: no row is stored and `row_count` is unchanged.
    pub fn add_row<I, T>(&mut self, values: I) -> Result<usize>
    where
        I: IntoIterator<Item = T>,
        T: Into<CellValue>,
    {
        let row: Vec<CellValue> = values.into_iter().map(Into::into).collect();
        if row.len() != self.columns.len() {
            return Err(GridError::ShapeMismatch {
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        let key = self.rows.len();
        self.rows.push(row);
        Ok(key)
    }

    /// Replace one stored cell value.
    ///
    /// # Errors
    /// `OutOfRange` if no cell exists at the coordinate.
    pub fn update_cell(
        &mut self,
        row: usize,
        column: usize,
        value: impl Into<CellValue>,
    ) -> Result<()> {
        let slot = self
            .rows
            .get_mut(row)
            .and_then(|r| r.get_mut(column))
            .ok_or(GridError::OutOfRange { row, column })?;
        *slot = value.into();
        Ok(())
    }

    /// Change a column's display width.
    ///
    /// # Errors
    /// `NoSuchColumn` for a bad index, `InvalidWidth` for a zero width.
    pub fn set_column_width(&mut self, column: usize, width: usize) -> Result<()> {
        if width < 1 {
            return Err(GridError::InvalidWidth { width });
        }
        let col = self
            .columns
            .get_mut(column)
            .ok_or(GridError::NoSuchColumn { column })?;
        col.width = width;
        Ok(())
    }

    /// Show or hide a column.
    ///
    /// # Errors
    /// `NoSuchColumn` for a bad index.
    pub fn set_column_visible(&mut self, column: usize, visible: bool) -> Result<()> {
        let col = self
            .columns
            .get_mut(column)
            .ok_or(GridError::NoSuchColumn { column })?;
        col.visible = visible;
        Ok(())
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of stored data rows, excluding the header.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Resolve a display row: row 0 is the header when `header_visible`,
    /// everything past the data resolves to [`LogicalRow::Blank`].
    pub fn logical_row(&self, display_row: usize, header_visible: bool) -> LogicalRow<'_> {
        if header_visible && display_row == 0 {
            return LogicalRow::Header(&self.columns);
        }
        let key = if header_visible {
            display_row - 1
        } else {
            display_row
        };
        match self.rows.get(key) {
            Some(row) => LogicalRow::Data(row),
            None => LogicalRow::Blank,
        }
    }
}
