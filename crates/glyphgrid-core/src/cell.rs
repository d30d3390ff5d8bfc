#![forbid(unsafe_code)]

//! Grid cell: the fundamental unit of the buffer.
//!
//! Each cell stores one displayable character and its color. Cells are
//! immutable values: a write replaces the whole cell, never a field of it.

use std::fmt;

/// Color of a cell's glyph.
///
/// The host drawing surface consumes CSS color strings, so this is the
/// narrow end of the usual terminal color hierarchy: either the surface
/// default or an explicit 24-bit RGB value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Surface default (rendered as white on a cleared surface).
    #[default]
    Default,
    /// 24-bit true color.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Create an RGB color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(r, g, b)
    }

    /// Parse a `#rgb` or `#rrggbb` CSS hex string.
    ///
    /// Returns `None` for anything else; hosts fall back to [`Color::Default`].
    #[must_use]
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        match hex.len() {
            3 => {
                let mut out = [0u8; 3];
                for (i, c) in hex.chars().enumerate() {
                    let v = c.to_digit(16)? as u8;
                    out[i] = v << 4 | v;
                }
                Some(Self::Rgb(out[0], out[1], out[2]))
            }
            6 => {
                // get() rather than byte-slicing: hosts pass arbitrary
                // strings, and a 6-byte value can straddle char boundaries.
                let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
                let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
                let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
                Some(Self::Rgb(r, g, b))
            }
            _ => None,
        }
    }

    /// The CSS color string the drawing surface consumes.
    #[must_use]
    pub fn css(&self) -> String {
        match self {
            Self::Default => "#ffffff".to_string(),
            Self::Rgb(r, g, b) => format!("#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}

/// One grid slot: a glyph and its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// The displayable character.
    pub glyph: char,
    /// Fill color for the glyph.
    pub color: Color,
}

impl Cell {
    /// The defined rendering for unwritten slots: a space in the default
    /// color. The buffer is pre-filled with this, so the renderer never
    /// observes an undefined cell.
    pub const BLANK: Self = Self {
        glyph: ' ',
        color: Color::Default,
    };

    /// Create a new cell.
    #[must_use]
    pub const fn new(glyph: char, color: Color) -> Self {
        Self { glyph, color }
    }

    /// Whether this cell is indistinguishable from an unwritten slot.
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.glyph == ' ' && matches!(self.color, Color::Default)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, Color};

    #[test]
    fn default_cell_is_blank() {
        let cell = Cell::default();
        assert_eq!(cell, Cell::BLANK);
        assert!(cell.is_blank());
        assert_eq!(cell.glyph, ' ');
        assert_eq!(cell.color, Color::Default);
    }

    #[test]
    fn written_cell_is_not_blank() {
        assert!(!Cell::new('A', Color::Default).is_blank());
        assert!(!Cell::new(' ', Color::rgb(1, 2, 3)).is_blank());
    }

    #[test]
    fn hex_parses_long_form() {
        assert_eq!(Color::from_hex("#ff0080"), Some(Color::Rgb(255, 0, 128)));
        assert_eq!(Color::from_hex("#000000"), Some(Color::Rgb(0, 0, 0)));
    }

    #[test]
    fn hex_parses_short_form() {
        assert_eq!(Color::from_hex("#f0a"), Some(Color::Rgb(0xff, 0x00, 0xaa)));
    }

    #[test]
    fn hex_rejects_garbage() {
        assert_eq!(Color::from_hex("red"), None);
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#gggggg"), None);
        assert_eq!(Color::from_hex(""), None);
    }

    #[test]
    fn hex_rejects_multibyte_without_panicking() {
        // 6 bytes, but the char boundaries do not line up with the
        // component slices.
        assert_eq!(Color::from_hex("#aéabc"), None);
        assert_eq!(Color::from_hex("#ééé"), None);
        assert_eq!(Color::from_hex("#é1"), None);
    }

    #[test]
    fn css_round_trips() {
        let c = Color::rgb(0x12, 0xab, 0x03);
        assert_eq!(c.css(), "#12ab03");
        assert_eq!(Color::from_hex(&c.css()), Some(c));
    }

    #[test]
    fn default_color_renders_white() {
        assert_eq!(Color::Default.css(), "#ffffff");
    }
}
