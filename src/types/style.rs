//! Styles: colors, attribute flags, and the layering rule that lets a base
//! style show through wherever a segment left a field unset.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

bitflags! {
    /// Text attributes applied to a segment.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attrs: u8 {
        const BOLD = 1;
        const ITALIC = 1 << 1;
        const UNDERLINE = 1 << 2;
        const REVERSE = 1 << 3;
        const DIM = 1 << 4;
    }
}

/// A run style: optional colors plus attribute flags.
///
/// `None` colors mean "unset" and let a lower layer show through when styles
/// are combined with [`Style::over`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub attrs: Attrs,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: Attrs::empty(),
        }
    }

    #[must_use]
    pub fn with_fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    #[must_use]
    pub fn with_bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.attrs |= Attrs::BOLD;
        self
    }

    #[must_use]
    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.attrs |= attrs;
        self
    }

    /// Layer this style over `base`: set fields win, unset fields fall back
    /// to `base`, attribute flags union.
    #[must_use]
    pub fn over(self, base: Style) -> Style {
        Style {
            fg: self.fg.or(base.fg),
            bg: self.bg.or(base.bg),
            attrs: self.attrs | base.attrs,
        }
    }

    /// Whether every field is unset.
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_empty()
    }
}

/// Ambient foreground/background pair for the whole grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub foreground: Color,
    pub background: Color,
}

impl From<ColorScheme> for Style {
    fn from(scheme: ColorScheme) -> Self {
        Style {
            fg: Some(scheme.foreground),
            bg: Some(scheme.background),
            attrs: Attrs::empty(),
        }
    }
}
