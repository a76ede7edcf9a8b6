//! Grid geometry: column edge precomputation and virtual content sizing.

mod grid_layout;

pub use grid_layout::{virtual_size, GridLayout, Size, DEFAULT_COLUMN_WIDTH};
