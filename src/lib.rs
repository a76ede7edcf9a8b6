//! gridline - virtualized, scrollable grid rendering for character displays.
//!
//! Given a logical table of rows and columns, only a fraction of which is
//! visible at once, `gridline` produces exactly the styled character cells
//! needed to paint a requested viewport:
//!
//! - virtual-to-physical coordinate mapping under scroll offsets
//! - partial-column cropping at viewport edges
//! - pinned rows/columns that render regardless of scroll position
//! - an LRU render cache so redraws during scrolling avoid recomputation
//!
//! The crate is display-agnostic: output is a sequence of [`Line`]s (runs of
//! text sharing a [`Style`]) that a host blits to a terminal buffer, a
//! canvas, or anything else that understands fixed-width character cells.
//!
//! # Usage
//!
//! ```
//! use gridline::{GridView, RenderParams};
//!
//! let mut view = GridView::new();
//! view.add_column_with_width("Name", 10)?;
//! view.add_column_with_width("Age", 5)?;
//! view.add_row(["Alice", "30"])?;
//!
//! let lines = view.render_viewport(&RenderParams {
//!     line_range: (0, 2),
//!     column_range: (0, 15),
//!     ..RenderParams::default()
//! });
//! assert_eq!(lines.len(), 2);
//! # Ok::<(), gridline::GridError>(())
//! ```

pub mod error;
pub mod layout;
pub mod render;
pub mod segment;
pub mod table;
pub mod types;
pub mod view;

pub use error::{GridError, Result};
pub use layout::{virtual_size, GridLayout, Size, DEFAULT_COLUMN_WIDTH};
pub use render::{CellKey, LruCache, RenderParams, DEFAULT_CACHE_CAPACITY};
pub use segment::{Line, Segment};
pub use table::{LogicalRow, Table};
pub use types::{Attrs, CellValue, Color, ColorScheme, Column, Style};
pub use view::{GridView, ViewConfig};
