// File: crates/chart-url/src/color.rs
// Summary: RGB color with an explicit optional alpha percentage, rendered as uppercase hex.

use std::fmt;
use std::str::FromStr;

use crate::error::{ChartError, Result};

/// Opaque RGB color, optionally carrying an alpha percentage in `0..=100`.
///
/// Renders as `RRGGBB`, or `RRGGBBAA` when alpha is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    alpha: Option<u8>,
}

impl Color {
    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: None }
    }

    /// Parse `RRGGBB` (an optional leading `#` is accepted).
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ChartError::InvalidColor(hex.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| ChartError::InvalidColor(hex.to_string()))
        };
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Same color with an alpha percentage (0 transparent, 100 opaque).
    pub fn with_alpha(self, percent: u8) -> Result<Self> {
        if percent > 100 {
            return Err(ChartError::InvalidAlpha(percent));
        }
        Ok(Self { alpha: Some(percent), ..self })
    }

    /// Same color without alpha.
    pub const fn opaque(self) -> Self {
        Self { alpha: None, ..self }
    }

    /// Alpha percentage, if set.
    pub const fn alpha(&self) -> Option<u8> {
        self.alpha
    }

    /// Alpha as the byte written after the RGB digits.
    pub fn alpha_byte(&self) -> Option<u8> {
        self.alpha.map(|p| ((p as u32 * 255 + 50) / 100) as u8)
    }

    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const RED: Color = Color::rgb(0xFF, 0x00, 0x00);
    pub const GREEN: Color = Color::rgb(0x00, 0x80, 0x00);
    pub const BLUE: Color = Color::rgb(0x00, 0x00, 0xFF);
    pub const GRAY: Color = Color::rgb(0x80, 0x80, 0x80);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if let Some(a) = self.alpha_byte() {
            write!(f, "{:02X}", a)?;
        }
        Ok(())
    }
}

impl FromStr for Color {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_uppercase_six_digits() {
        assert_eq!(Color::rgb(0xab, 0x01, 0xff).to_string(), "AB01FF");
        assert_eq!(Color::from_hex("#ff0000").unwrap().to_string(), "FF0000");
    }

    #[test]
    fn alpha_appends_two_digits() {
        let c = Color::RED.with_alpha(50).unwrap();
        assert_eq!(c.to_string(), "FF000080");
        assert_eq!(Color::RED.with_alpha(100).unwrap().to_string(), "FF0000FF");
        assert_eq!(Color::RED.with_alpha(0).unwrap().to_string(), "FF000000");
        assert_eq!(c.opaque().to_string(), "FF0000");
    }

    #[test]
    fn rejects_bad_input() {
        assert!(Color::from_hex("FF00").is_err());
        assert!(Color::from_hex("GG0000").is_err());
        assert!(Color::from_hex("FF0000AA").is_err());
        assert_eq!(Color::BLACK.with_alpha(101), Err(ChartError::InvalidAlpha(101)));
    }
}
