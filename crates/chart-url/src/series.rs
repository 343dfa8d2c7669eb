// File: crates/chart-url/src/series.rs
// Summary: Bounded series model and the encoding scheme selector.
// Notes:
// - Values are logically in [0, 100]; anything else is the Invalid marker
//   and is only interpreted at encode time.
// - NaN is rejected at construction, so every stored value is comparable.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{ChartError, Result};
use crate::types::{INVALID, VALUE_MAX, VALUE_MIN};

/// Selects the codec used for every series of one chart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EncodingScheme {
    /// Plain decimals; readable but verbose.
    Text,
    /// One character per point, 62 levels.
    Simple,
    /// Two characters per point, 4096 levels.
    #[default]
    Extended,
}

impl EncodingScheme {
    /// Token placed in front of the data value (`s:`, `e:`; none for text).
    pub const fn prefix(self) -> &'static str {
        match self {
            EncodingScheme::Text => "",
            EncodingScheme::Simple => "s:",
            EncodingScheme::Extended => "e:",
        }
    }
}

impl fmt::Display for EncodingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EncodingScheme::Text => "text",
            EncodingScheme::Simple => "simple",
            EncodingScheme::Extended => "extended",
        };
        f.write_str(name)
    }
}

impl FromStr for EncodingScheme {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "t" => Ok(EncodingScheme::Text),
            "simple" | "s" => Ok(EncodingScheme::Simple),
            "extended" | "e" => Ok(EncodingScheme::Extended),
            _ => Err(ChartError::UnknownEncoding(s.to_string())),
        }
    }
}

/// An immutable series of values in `[0, 100]`.
///
/// Cloning is cheap: the points live behind an `Arc<[f64]>` and nothing hands
/// out a mutable view.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundedSeries {
    values: Arc<[f64]>,
}

impl BoundedSeries {
    /// Copy `values` into a new series, rejecting NaN.
    pub fn new(values: &[f64]) -> Result<Self> {
        if let Some(index) = values.iter().position(|v| v.is_nan()) {
            return Err(ChartError::NanValue { index });
        }
        Ok(Self { values: Arc::from(values) })
    }

    /// Series with no points.
    pub fn empty() -> Self {
        Self { values: Arc::from(Vec::new()) }
    }

    /// Linearly rescale `values` from `[min, max]` into `[0, 100]`.
    /// NaN inputs become Invalid rather than failing.
    pub fn scaled(values: &[f64], min: f64, max: f64) -> Result<Self> {
        if max.is_nan() || min.is_nan() || max <= min {
            return Err(ChartError::NonPositive { what: "series span", value: max - min });
        }
        let span = max - min;
        let data = values
            .iter()
            .map(|&v| if v.is_nan() { INVALID } else { (v - min) / span * VALUE_MAX })
            .collect::<Vec<_>>();
        Ok(Self { values: Arc::from(data) })
    }

    /// Number of points.
    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Read-only view of the points.
    pub fn values(&self) -> &[f64] { &self.values }

    /// Owned copy of the points.
    pub fn to_vec(&self) -> Vec<f64> { self.values.to_vec() }

    /// Point at `index`, if any.
    pub fn get(&self, index: usize) -> Option<f64> { self.values.get(index).copied() }

    /// Whether the point at `index` is the Invalid marker.
    pub fn is_invalid_at(&self, index: usize) -> bool {
        self.get(index).map(|v| !is_valid(v)).unwrap_or(false)
    }
}

impl TryFrom<Vec<f64>> for BoundedSeries {
    type Error = ChartError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::new(&values)
    }
}

impl TryFrom<&[f64]> for BoundedSeries {
    type Error = ChartError;

    fn try_from(values: &[f64]) -> Result<Self> {
        Self::new(values)
    }
}

/// Whether `v` is a valid point (inside `[0, 100]`).
#[inline]
pub fn is_valid(v: f64) -> bool {
    (VALUE_MIN..=VALUE_MAX).contains(&v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_is_rejected_with_its_index() {
        let err = BoundedSeries::new(&[1.0, f64::NAN]).unwrap_err();
        assert_eq!(err, ChartError::NanValue { index: 1 });
    }

    #[test]
    fn out_of_range_is_kept_as_invalid() {
        let s = BoundedSeries::new(&[-1.0, 50.0, 120.0, f64::INFINITY]).unwrap();
        assert!(s.is_invalid_at(0));
        assert!(!s.is_invalid_at(1));
        assert!(s.is_invalid_at(2));
        assert!(s.is_invalid_at(3));
    }

    #[test]
    fn input_is_copied() {
        let mut raw = vec![10.0, 20.0];
        let s = BoundedSeries::new(&raw).unwrap();
        raw[0] = 99.0;
        assert_eq!(s.values(), &[10.0, 20.0]);
        let mut out = s.to_vec();
        out[1] = 0.0;
        assert_eq!(s.get(1), Some(20.0));
    }

    #[test]
    fn scaled_maps_span_onto_percent() {
        let s = BoundedSeries::scaled(&[10.0, 15.0, 20.0, f64::NAN], 10.0, 20.0).unwrap();
        assert_eq!(s.values(), &[0.0, 50.0, 100.0, INVALID]);
        assert!(BoundedSeries::scaled(&[1.0], 5.0, 5.0).is_err());
    }

    #[test]
    fn scheme_parses_names() {
        assert_eq!("Simple".parse::<EncodingScheme>().unwrap(), EncodingScheme::Simple);
        assert_eq!("e".parse::<EncodingScheme>().unwrap(), EncodingScheme::Extended);
        assert!("base64".parse::<EncodingScheme>().is_err());
    }
}
