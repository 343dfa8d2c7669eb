// File: crates/chart-url/src/params/bar.rs
// Summary: Bar geometry (`chbh`) and the two `chp` parameters (bar zero lines, pie orientation).

use std::fmt;

use crate::error::{ensure_positive, ensure_within, Result};
use crate::grammar::{fmt_fraction, fmt_num, join_fields, Record};
use crate::params::Parameter;
use crate::types::VALUE_MAX;

/// Bar thickness.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarWidth {
    /// Sized by the API to fit (`a`).
    Automatic,
    /// Sized to fit, spacing given relative to bar width (`r`).
    Relative,
    /// Fixed width in pixels.
    Fixed(u32),
}

impl fmt::Display for BarWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BarWidth::Automatic => f.write_str("a"),
            BarWidth::Relative => f.write_str("r"),
            BarWidth::Fixed(px) => write!(f, "{px}"),
        }
    }
}

/// `chbh`: `width[,bar_space[,group_space]]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarWidthAndSpacingParameter {
    width: BarWidth,
    bar_space: Option<u32>,
    group_space: Option<u32>,
}

impl BarWidthAndSpacingParameter {
    pub fn new(width: BarWidth) -> Result<Self> {
        if let BarWidth::Fixed(px) = width {
            ensure_positive("bar width", px as f64)?;
        }
        Ok(Self { width, bar_space: None, group_space: None })
    }

    /// Space between bars of a group and between groups.
    pub fn with_spacing(self, bar_space: u32, group_space: u32) -> Self {
        Self { bar_space: Some(bar_space), group_space: Some(group_space), ..self }
    }
}

impl Parameter for BarWidthAndSpacingParameter {
    fn key(&self) -> &'static str { "chbh" }
    fn value(&self) -> String {
        Record::new()
            .field(self.width)
            .opt(self.bar_space)
            .opt(self.group_space)
            .to_string()
    }
}

/// `chp` (bar charts): where the zero line sits for each series, given as a
/// percentage of the chart height and sent as a fraction.
#[derive(Clone, Debug, PartialEq)]
pub struct BarZeroLinesParameter {
    lines: Vec<f64>,
}

impl BarZeroLinesParameter {
    pub fn new(lines: Vec<f64>) -> Result<Self> {
        for &z in &lines {
            ensure_within("zero line", z, 0.0, VALUE_MAX)?;
        }
        Ok(Self { lines })
    }
}

impl Parameter for BarZeroLinesParameter {
    fn key(&self) -> &'static str { "chp" }
    fn value(&self) -> String { join_fields(self.lines.iter().map(|z| fmt_fraction(*z))) }
}

/// `chp` (pie charts): rotation of the first slice, in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieOrientationParameter {
    radians: f64,
}

impl PieOrientationParameter {
    pub fn new(radians: f64) -> Result<Self> {
        ensure_within("pie orientation", radians, -std::f64::consts::TAU, std::f64::consts::TAU)?;
        Ok(Self { radians })
    }
}

impl Parameter for PieOrientationParameter {
    fn key(&self) -> &'static str { "chp" }
    fn value(&self) -> String { fmt_num(self.radians) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_and_spacing() {
        let auto = BarWidthAndSpacingParameter::new(BarWidth::Automatic).unwrap();
        assert_eq!(auto.value(), "a");
        let fixed = BarWidthAndSpacingParameter::new(BarWidth::Fixed(10)).unwrap().with_spacing(4, 12);
        assert_eq!(fixed.value(), "10,4,12");
        assert!(BarWidthAndSpacingParameter::new(BarWidth::Fixed(0)).is_err());
    }

    #[test]
    fn zero_lines_are_fractions() {
        let p = BarZeroLinesParameter::new(vec![50.0, 25.0]).unwrap();
        assert_eq!(p.value(), "0.5,0.25");
        assert!(BarZeroLinesParameter::new(vec![120.0]).is_err());
        assert_eq!(BarZeroLinesParameter::new(Vec::new()).unwrap().value(), "");
    }
}
