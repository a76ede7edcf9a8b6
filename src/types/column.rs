use serde::{Deserialize, Serialize};

/// A column definition.
///
/// Columns form an ordered sequence; insertion order defines both `index`
/// and left-to-right screen position. Columns are append-only, so `index`
/// doubles as a stable cache key and always equals the column's position in
/// the sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Header label; also the content of this column's header-row cell.
    pub label: String,
    /// Display width in character cells, including the one-cell inner
    /// padding on each side. Always >= 1.
    pub width: usize,
    /// 0-based position in the column sequence.
    pub index: usize,
    /// Hidden columns contribute zero width and are skipped when composing.
    pub visible: bool,
}

impl Column {
    pub fn new(label: impl Into<String>, width: usize, index: usize) -> Self {
        Self {
            label: label.into(),
            width,
            index,
            visible: true,
        }
    }
}
