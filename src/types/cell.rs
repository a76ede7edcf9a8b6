use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cell's raw value.
///
/// Values are stored untyped per cell; formatting to display text happens at
/// render time and is memoized by the render cache. The untagged serde
/// representation lets hosts load row data straight from JSON arrays
/// (`["Alice", 30, true]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Boolean, displayed as `true`/`false`.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Number(f64),
    /// Plain text.
    Text(String),
    /// No value; renders as blank.
    Empty,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Empty => Ok(()),
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}
