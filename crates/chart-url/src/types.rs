// File: crates/chart-url/src/types.rs
// Summary: Shared types and constants (endpoint, size limits, value range, margins).

/// Default chart endpoint the rendered query string is appended to.
pub const BASE_URL: &str = "https://chart.googleapis.com/chart";

/// Default chart width in pixels.
pub const WIDTH: u32 = 600;
/// Default chart height in pixels.
pub const HEIGHT: u32 = 400;
/// Largest width or height the API accepts.
pub const MAX_DIMENSION: u32 = 1000;
/// Largest `width * height` the API accepts.
pub const MAX_PIXELS: u32 = 300_000;

/// Lower bound of a valid series value.
pub const VALUE_MIN: f64 = 0.0;
/// Upper bound of a valid series value.
pub const VALUE_MAX: f64 = 100.0;
/// Canonical Invalid value; anything outside `VALUE_MIN..=VALUE_MAX` behaves the same.
pub const INVALID: f64 = -1.0;

/// Chart margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Margins {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Margins {
    /// Create new margins (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Same margin on every side.
    pub const fn uniform(px: u32) -> Self {
        Self::new(px, px, px, px)
    }
    /// Total horizontal margin (left + right), `None` on overflow.
    pub const fn hsum(&self) -> Option<u32> { self.left.checked_add(self.right) }
    /// Total vertical margin (top + bottom), `None` on overflow.
    pub const fn vsum(&self) -> Option<u32> { self.top.checked_add(self.bottom) }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(30, 30, 30, 30)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margin_sums_report_overflow() {
        assert_eq!(Margins::new(10, 20, 3, 4).hsum(), Some(30));
        assert_eq!(Margins::new(10, 20, 3, 4).vsum(), Some(7));
        assert_eq!(Margins::new(u32::MAX, 1, 0, 0).hsum(), None);
        assert_eq!(Margins::new(0, 0, 1, u32::MAX).vsum(), None);
    }
}
