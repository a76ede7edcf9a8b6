//! Core data types shared across the crate.

pub mod cell;
pub mod column;
pub mod style;

pub use cell::CellValue;
pub use column::Column;
pub use style::{Attrs, Color, ColorScheme, Style};
