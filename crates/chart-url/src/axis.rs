// File: crates/chart-url/src/axis.rs
// Summary: Axis model with labels, label positions, range and style; indexed when placed in a chart.

use crate::color::Color;
use crate::error::{ChartError, Result};
use crate::params::{AxisRange, AxisStyle, AxisType};

/// One visible axis. Its index in the rendered URL is its position in
/// the chart's axis list, assigned when the chart is built.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisInfo {
    kind: AxisType,
    labels: Vec<String>,
    positions: Vec<f64>,
    range: Option<AxisRange>,
    style: Option<AxisStyle>,
}

impl AxisInfo {
    pub fn new(kind: AxisType) -> Self {
        Self { kind, labels: Vec::new(), positions: Vec::new(), range: None, style: None }
    }

    pub fn x() -> Self {
        Self::new(AxisType::X)
    }

    pub fn y() -> Self {
        Self::new(AxisType::Y)
    }

    pub fn right() -> Self {
        Self::new(AxisType::Right)
    }

    pub fn top() -> Self {
        Self::new(AxisType::Top)
    }

    /// Text labels, spread evenly unless positions are also given.
    pub fn with_labels<I, S>(self, labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let axis = Self { labels: labels.into_iter().map(Into::into).collect(), ..self };
        axis.check_counts()?;
        Ok(axis)
    }

    /// Label positions in range units. With labels set, counts must match.
    pub fn with_positions(self, positions: Vec<f64>) -> Result<Self> {
        if let Some(&bad) = positions.iter().find(|p| !p.is_finite()) {
            return Err(ChartError::OutOfRange { what: "axis label position", value: bad, min: f64::MIN, max: f64::MAX });
        }
        let axis = Self { positions, ..self };
        axis.check_counts()?;
        Ok(axis)
    }

    pub fn with_range(self, start: f64, end: f64) -> Result<Self> {
        Ok(Self { range: Some(AxisRange::new(0, start, end)?), ..self })
    }

    pub fn with_range_interval(self, start: f64, end: f64, interval: f64) -> Result<Self> {
        let range = AxisRange::new(0, start, end)?.with_interval(interval)?;
        Ok(Self { range: Some(range), ..self })
    }

    /// Label color and font size; see [`with_style`](Self::with_style) for the rest.
    pub fn styled(self, color: Color, font_size: f64) -> Result<Self> {
        Ok(self.with_style(AxisStyle::new(0, color, font_size)?))
    }

    /// Full style. The style's own axis index is ignored.
    pub fn with_style(self, style: AxisStyle) -> Self {
        Self { style: Some(style), ..self }
    }

    pub fn kind(&self) -> AxisType { self.kind }
    pub fn labels(&self) -> &[String] { &self.labels }
    pub fn positions(&self) -> &[f64] { &self.positions }

    /// Range rebound to axis `index`.
    pub fn range_at(&self, index: usize) -> Option<AxisRange> {
        self.range.map(|r| r.for_axis(index))
    }

    /// Style rebound to axis `index`.
    pub fn style_at(&self, index: usize) -> Option<AxisStyle> {
        self.style.map(|s| s.for_axis(index))
    }

    fn check_counts(&self) -> Result<()> {
        if !self.labels.is_empty() && !self.positions.is_empty() && self.labels.len() != self.positions.len() {
            return Err(ChartError::LengthMismatch {
                what: "axis label positions",
                expected: self.labels.len(),
                got: self.positions.len(),
            });
        }
        Ok(())
    }
}
