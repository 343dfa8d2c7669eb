// File: crates/chart-url/src/params/fill.rs
// Summary: `chf` background/chart-area fills and `chls` per-series line styles.

use std::fmt;

use crate::color::Color;
use crate::error::{ensure_positive, ensure_within, ChartError, Result};
use crate::grammar::{fmt_fraction, join_records, Record};
use crate::params::{Accumulating, Parameter};
use crate::types::VALUE_MAX;

/// Surface a fill applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillTarget {
    /// Whole image background.
    Background,
    /// Plot area only.
    ChartArea,
    /// Whole chart, solid fills only: the color's alpha becomes the chart's transparency.
    Transparency,
}

impl FillTarget {
    pub const fn code(self) -> &'static str {
        match self {
            FillTarget::Background => "bg",
            FillTarget::ChartArea => "c",
            FillTarget::Transparency => "a",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Pattern {
    Solid(Color),
    Gradient { angle: f64, stops: Vec<(Color, f64)> },
    Stripes { angle: f64, stripes: Vec<(Color, f64)> },
}

/// One `chf` entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Fill {
    target: FillTarget,
    pattern: Pattern,
}

impl Fill {
    pub fn solid(target: FillTarget, color: Color) -> Self {
        Self { target, pattern: Pattern::Solid(color) }
    }

    /// Linear gradient at `angle` degrees; each stop is a color and its offset
    /// in `[0, 100]` percent along the gradient.
    pub fn gradient(target: FillTarget, angle: f64, stops: Vec<(Color, f64)>) -> Result<Self> {
        Self::check_banded(target, angle, &stops, "gradient offset", 0.0)?;
        Ok(Self { target, pattern: Pattern::Gradient { angle, stops } })
    }

    /// Linear stripes at `angle` degrees; each stripe is a color and its width
    /// in `(0, 100]` percent of the chart.
    pub fn stripes(target: FillTarget, angle: f64, stripes: Vec<(Color, f64)>) -> Result<Self> {
        Self::check_banded(target, angle, &stripes, "stripe width", f64::MIN_POSITIVE)?;
        Ok(Self { target, pattern: Pattern::Stripes { angle, stripes } })
    }

    fn check_banded(target: FillTarget, angle: f64, bands: &[(Color, f64)], what: &'static str, min: f64) -> Result<()> {
        if target == FillTarget::Transparency {
            return Err(ChartError::Unsupported("gradient or stripe fill on the transparency target"));
        }
        ensure_within("fill angle", angle, 0.0, 90.0)?;
        if bands.is_empty() {
            return Err(ChartError::LengthMismatch { what, expected: 1, got: 0 });
        }
        for &(_, v) in bands {
            ensure_within(what, v, min, VALUE_MAX)?;
        }
        Ok(())
    }

    pub fn target(&self) -> FillTarget { self.target }
}

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base = Record::new().field(self.target.code());
        let record = match &self.pattern {
            Pattern::Solid(color) => base.field('s').field(color),
            Pattern::Gradient { angle, stops: bands } | Pattern::Stripes { angle, stripes: bands } => {
                let kind = if matches!(self.pattern, Pattern::Gradient { .. }) { "lg" } else { "ls" };
                bands
                    .iter()
                    .fold(base.field(kind).num(*angle), |r, (c, v)| r.field(c).field(fmt_fraction(*v)))
            }
        };
        write!(f, "{record}")
    }
}

/// `chf`: `bg,s,EFEFEF|c,lg,45,FFFFFF,0,76A4FB,0.75`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FillsParameter {
    fills: Vec<Fill>,
}

impl Parameter for FillsParameter {
    fn key(&self) -> &'static str { Self::KEY }
    fn value(&self) -> String { join_records(&self.fills) }
}

impl Accumulating for FillsParameter {
    const KEY: &'static str = "chf";
    type Entry = Fill;

    fn push(&mut self, entry: Fill) { self.fills.push(entry); }
    fn entries(&self) -> &[Fill] { &self.fills }
}

/// Stroke of one line series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    thickness: f64,
    dash: Option<(f64, f64)>,
}

impl LineStyle {
    pub fn solid(thickness: f64) -> Result<Self> {
        ensure_positive("line thickness", thickness)?;
        Ok(Self { thickness, dash: None })
    }

    /// `segment` px drawn, then `blank` px skipped.
    pub fn dashed(thickness: f64, segment: f64, blank: f64) -> Result<Self> {
        ensure_positive("line thickness", thickness)?;
        ensure_positive("dash segment", segment)?;
        ensure_within("dash blank", blank, 0.0, f64::MAX)?;
        Ok(Self { thickness, dash: Some((segment, blank)) })
    }

    pub fn thickness(&self) -> f64 { self.thickness }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self { thickness: 1.0, dash: None }
    }
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = Record::new()
            .num(self.thickness)
            .opt_num(self.dash.map(|d| d.0))
            .opt_num(self.dash.map(|d| d.1));
        write!(f, "{record}")
    }
}

/// `chls`: one style per line series, in series order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineStylesParameter {
    styles: Vec<LineStyle>,
}

impl Parameter for LineStylesParameter {
    fn key(&self) -> &'static str { Self::KEY }
    fn value(&self) -> String { join_records(&self.styles) }
}

impl Accumulating for LineStylesParameter {
    const KEY: &'static str = "chls";
    type Entry = LineStyle;

    fn push(&mut self, entry: LineStyle) { self.styles.push(entry); }
    fn entries(&self) -> &[LineStyle] { &self.styles }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_and_gradient() {
        let bg = Fill::solid(FillTarget::Background, Color::from_hex("EFEFEF").unwrap());
        assert_eq!(bg.to_string(), "bg,s,EFEFEF");
        let grad = Fill::gradient(
            FillTarget::ChartArea,
            45.0,
            vec![(Color::WHITE, 0.0), (Color::from_hex("76A4FB").unwrap(), 75.0)],
        )
        .unwrap();
        assert_eq!(grad.to_string(), "c,lg,45,FFFFFF,0,76A4FB,0.75");
    }

    #[test]
    fn stripes_need_positive_widths() {
        let s = Fill::stripes(FillTarget::ChartArea, 0.0, vec![(Color::GRAY, 20.0), (Color::WHITE, 20.0)]).unwrap();
        assert_eq!(s.to_string(), "c,ls,0,808080,0.2,FFFFFF,0.2");
        assert!(Fill::stripes(FillTarget::ChartArea, 0.0, vec![(Color::GRAY, 0.0)]).is_err());
        assert!(Fill::gradient(FillTarget::Transparency, 0.0, vec![(Color::GRAY, 0.0)]).is_err());
        assert!(Fill::gradient(FillTarget::ChartArea, 0.0, Vec::new()).is_err());
    }

    #[test]
    fn line_styles() {
        let mut p = LineStylesParameter::default();
        assert_eq!(p.value(), "");
        p.push(LineStyle::solid(2.0).unwrap());
        p.push(LineStyle::dashed(1.0, 4.0, 2.0).unwrap());
        assert_eq!(p.value(), "2|1,4,2");
    }
}
