//! Structured error types for gridline.
//!
//! Only mutations can fail. The render path is deliberately infallible:
//! malformed viewport requests degrade to empty output and out-of-range
//! rows render blank (see [`Table::logical_row`](crate::table::Table)).

/// All errors that can occur while mutating a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Row value count does not match the column count.
    #[error("row has {actual} values, table has {expected} columns")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Column width below the 1-cell minimum.
    #[error("column width must be at least 1, got {width}")]
    InvalidWidth { width: usize },

    /// No column at the given index.
    #[error("no column at index {column}")]
    NoSuchColumn { column: usize },

    /// Cell coordinate outside the stored data.
    #[error("no cell at row {row}, column {column}")]
    OutOfRange { row: usize, column: usize },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;
