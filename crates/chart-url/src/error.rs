// File: crates/chart-url/src/error.rs
// Summary: Error type shared by every constructor and parser in the crate.

use thiserror::Error;

/// Errors raised while building chart configuration or parsing a chart URL.
///
/// Every variant is produced at construction time of the offending value;
/// rendering itself never fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// A series contained NaN, which has no Invalid-vs-valid meaning.
    #[error("series value at index {index} is NaN")]
    NanValue { index: usize },

    /// A hex color string that is not exactly six hex digits.
    #[error("invalid color `{0}`: expected six hex digits (RRGGBB)")]
    InvalidColor(String),

    /// Alpha percentage above 100.
    #[error("alpha {0} outside 0..=100")]
    InvalidAlpha(u8),

    /// Width/height pair the API refuses.
    #[error("invalid chart size {width}x{height}: {reason}")]
    InvalidSize {
        width: u32,
        height: u32,
        reason: &'static str,
    },

    /// A size, width or step that must be strictly positive.
    #[error("{what} must be positive, got {value}")]
    NonPositive { what: &'static str, value: f64 },

    /// A numeric field outside its documented range.
    #[error("{what} {value} outside {min}..={max}")]
    OutOfRange {
        what: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// An index range whose end does not come after its start.
    #[error("inverted index range {start}..{end}")]
    InvertedRange { start: usize, end: usize },

    /// Two parallel lists that must be the same length.
    #[error("{what}: expected {expected} entries, got {got}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    /// A combination of options the API does not support.
    #[error("unsupported: {0}")]
    Unsupported(&'static str),

    /// An encoding name other than text, simple or extended.
    #[error("unknown encoding scheme `{0}`")]
    UnknownEncoding(String),

    /// A URL that does not follow `base?key=value&...`.
    #[error("malformed query string: {0}")]
    MalformedQuery(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ChartError>;

/// Reject NaN and non-positive values for fields such as sizes and widths.
pub(crate) fn ensure_positive(what: &'static str, value: f64) -> Result<()> {
    if value.is_nan() || value <= 0.0 {
        return Err(ChartError::NonPositive { what, value });
    }
    Ok(())
}

/// Reject values outside `min..=max` (NaN included).
pub(crate) fn ensure_within(what: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if !(min..=max).contains(&value) {
        return Err(ChartError::OutOfRange { what, value, min, max });
    }
    Ok(())
}
