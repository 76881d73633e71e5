//! Core value types shared by styles, layout and painting.

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Alpha 255 = fully opaque, 0 = fully transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Check if color is fully transparent.
    #[inline]
    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` (case-insensitive).
    ///
    /// Short forms expand each digit (`#f0c` → `#ff00cc`).
    pub fn from_hex(input: &str) -> Option<Self> {
        let hex = input.strip_prefix('#')?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok();
        let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

        match hex.len() {
            3 | 4 => {
                let r = digit(0)? * 17;
                let g = digit(1)? * 17;
                let b = digit(2)? * 17;
                let a = if hex.len() == 4 { digit(3)? * 17 } else { 255 };
                Some(Self::new(r, g, b, a))
            }
            6 | 8 => {
                let a = if hex.len() == 8 { pair(6)? } else { 255 };
                Some(Self::new(pair(0)?, pair(2)?, pair(4)?, a))
            }
            _ => None,
        }
    }
}

// =============================================================================
// Length
// =============================================================================

/// A length that can be absolute, a percentage of the parent, or automatic.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Length {
    /// Size determined by the layout engine.
    #[default]
    Auto,
    /// Absolute size in canvas units.
    Points(f32),
    /// Percentage of parent size (0-100).
    Percent(f32),
}

impl From<f32> for Length {
    fn from(value: f32) -> Self {
        Self::Points(value)
    }
}

/// Narrowed to `f32`, like the style inputs.
impl From<f64> for Length {
    fn from(value: f64) -> Self {
        Self::Points(value as f32)
    }
}

// =============================================================================
// Flex Enums
// =============================================================================

/// Main axis of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flow {
    Row,
    #[default]
    Column,
}

/// Cross axis alignment for items and wrapped lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Start,
    End,
    Center,
    Stretch,
}

/// Main axis distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    #[default]
    Start,
    End,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

/// Writing direction handed to the layout engine. Only left-to-right is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ltr,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_short_forms() {
        assert_eq!(Rgba::from_hex("#fff"), Some(Rgba::WHITE));
        assert_eq!(Rgba::from_hex("#001"), Some(Rgba::rgb(0, 0, 0x11)));
        assert_eq!(Rgba::from_hex("#fff2"), Some(Rgba::new(255, 255, 255, 0x22)));
    }

    #[test]
    fn test_hex_long_forms() {
        assert_eq!(Rgba::from_hex("#F9CA24"), Some(Rgba::rgb(0xf9, 0xca, 0x24)));
        assert_eq!(Rgba::from_hex("#f9ca2433"), Some(Rgba::new(0xf9, 0xca, 0x24, 0x33)));
    }

    #[test]
    fn test_hex_rejects() {
        assert_eq!(Rgba::from_hex("fff"), None);
        assert_eq!(Rgba::from_hex("#ff"), None);
        assert_eq!(Rgba::from_hex("#fffff"), None);
        assert_eq!(Rgba::from_hex("#ggg"), None);
        assert_eq!(Rgba::from_hex("#ffffffff0"), None);
    }
}
