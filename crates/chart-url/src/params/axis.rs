// File: crates/chart-url/src/params/axis.rs
// Summary: Accumulating axis parameters: types, labels, label positions, ranges, styles.

use std::fmt;

use crate::color::Color;
use crate::error::{ensure_positive, ChartError, Result};
use crate::grammar::{encode_text, fmt_decimal, join_fields, join_records, Record};
use crate::params::{Accumulating, Parameter};

/// Which side of the chart an axis is drawn on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisType {
    /// Bottom x-axis.
    X,
    /// Left y-axis.
    Y,
    /// Right y-axis.
    Right,
    /// Top x-axis.
    Top,
}

impl AxisType {
    pub const fn code(self) -> &'static str {
        match self {
            AxisType::X => "x",
            AxisType::Y => "y",
            AxisType::Right => "r",
            AxisType::Top => "t",
        }
    }
}

impl fmt::Display for AxisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// `chxt`: axis sides; the position in this list is the axis index used by
/// every other axis parameter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisTypesParameter {
    types: Vec<AxisType>,
}

impl Parameter for AxisTypesParameter {
    fn key(&self) -> &'static str { Self::KEY }
    fn value(&self) -> String { join_fields(&self.types) }
}

impl Accumulating for AxisTypesParameter {
    const KEY: &'static str = "chxt";
    type Entry = AxisType;

    fn push(&mut self, entry: AxisType) { self.types.push(entry); }
    fn entries(&self) -> &[AxisType] { &self.types }
}

/// Text labels spread evenly along one axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabels {
    pub index: usize,
    pub labels: Vec<String>,
}

impl AxisLabels {
    pub fn new<I, S>(index: usize, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { index, labels: labels.into_iter().map(Into::into).collect() }
    }
}

impl fmt::Display for AxisLabels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.index)?;
        for label in &self.labels {
            write!(f, "|{}", encode_text(label))?;
        }
        Ok(())
    }
}

/// `chxl`: `0:|Jan|Feb|1:|Low|High`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisLabelsParameter {
    entries: Vec<AxisLabels>,
}

impl Parameter for AxisLabelsParameter {
    fn key(&self) -> &'static str { Self::KEY }
    fn value(&self) -> String { join_records(&self.entries) }
}

impl Accumulating for AxisLabelsParameter {
    const KEY: &'static str = "chxl";
    type Entry = AxisLabels;

    fn push(&mut self, entry: AxisLabels) { self.entries.push(entry); }
    fn entries(&self) -> &[AxisLabels] { &self.entries }
}

/// Where the labels of one axis sit, in the axis range's units.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabelPositions {
    pub index: usize,
    pub positions: Vec<f64>,
}

impl AxisLabelPositions {
    pub fn new(index: usize, positions: Vec<f64>) -> Self {
        Self { index, positions }
    }
}

impl fmt::Display for AxisLabelPositions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.positions.iter().fold(Record::new().field(self.index), |r, &p| r.num(p));
        write!(f, "{record}")
    }
}

/// `chxp`: `index,pos1,pos2|...`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisLabelPositionsParameter {
    entries: Vec<AxisLabelPositions>,
}

impl Parameter for AxisLabelPositionsParameter {
    fn key(&self) -> &'static str { Self::KEY }
    fn value(&self) -> String { join_records(&self.entries) }
}

impl Accumulating for AxisLabelPositionsParameter {
    const KEY: &'static str = "chxp";
    type Entry = AxisLabelPositions;

    fn push(&mut self, entry: AxisLabelPositions) { self.entries.push(entry); }
    fn entries(&self) -> &[AxisLabelPositions] { &self.entries }
}

/// Numeric range labelled along one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    index: usize,
    start: f64,
    end: f64,
    interval: Option<f64>,
}

impl AxisRange {
    /// `start` may exceed `end` for a descending axis.
    pub fn new(index: usize, start: f64, end: f64) -> Result<Self> {
        for (what, v) in [("axis range start", start), ("axis range end", end)] {
            if !v.is_finite() {
                return Err(ChartError::OutOfRange { what, value: v, min: f64::MIN, max: f64::MAX });
            }
        }
        Ok(Self { index, start, end, interval: None })
    }

    /// Tick interval in range units.
    pub fn with_interval(self, interval: f64) -> Result<Self> {
        ensure_positive("axis range interval", interval)?;
        Ok(Self { interval: Some(interval), ..self })
    }

    /// Same range attached to axis `index`.
    pub fn for_axis(self, index: usize) -> Self {
        Self { index, ..self }
    }

    pub fn index(&self) -> usize { self.index }
    pub fn start(&self) -> f64 { self.start }
    pub fn end(&self) -> f64 { self.end }
}

impl fmt::Display for AxisRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = Record::new()
            .field(self.index)
            .field(fmt_decimal(self.start))
            .field(fmt_decimal(self.end))
            .opt(self.interval.map(fmt_decimal));
        write!(f, "{record}")
    }
}

/// `chxr`: `index,start,end[,interval]|...`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisRangesParameter {
    entries: Vec<AxisRange>,
}

impl Parameter for AxisRangesParameter {
    fn key(&self) -> &'static str { Self::KEY }
    fn value(&self) -> String { join_records(&self.entries) }
}

impl Accumulating for AxisRangesParameter {
    const KEY: &'static str = "chxr";
    type Entry = AxisRange;

    fn push(&mut self, entry: AxisRange) { self.entries.push(entry); }
    fn entries(&self) -> &[AxisRange] { &self.entries }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisAlignment {
    Left,
    #[default]
    Center,
    Right,
}

impl fmt::Display for AxisAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = match self {
            AxisAlignment::Left => "-1",
            AxisAlignment::Center => "0",
            AxisAlignment::Right => "1",
        };
        f.write_str(v)
    }
}

/// Whether the axis line and tick marks are drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawingControl {
    LineOnly,
    TicksOnly,
    #[default]
    LineAndTicks,
    Neither,
}

impl fmt::Display for DrawingControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = match self {
            DrawingControl::LineOnly => "l",
            DrawingControl::TicksOnly => "t",
            DrawingControl::LineAndTicks => "lt",
            DrawingControl::Neither => "_",
        };
        f.write_str(v)
    }
}

/// Label color and font for one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisStyle {
    index: usize,
    color: Color,
    font_size: f64,
    alignment: Option<AxisAlignment>,
    drawing_control: Option<DrawingControl>,
    tick_color: Option<Color>,
}

impl AxisStyle {
    pub fn new(index: usize, color: Color, font_size: f64) -> Result<Self> {
        ensure_positive("axis font size", font_size)?;
        Ok(Self { index, color, font_size, alignment: None, drawing_control: None, tick_color: None })
    }

    pub fn with_alignment(self, alignment: AxisAlignment) -> Self {
        Self { alignment: Some(alignment), ..self }
    }

    pub fn with_drawing_control(self, control: DrawingControl) -> Self {
        Self { drawing_control: Some(control), ..self }
    }

    pub fn with_tick_color(self, color: Color) -> Self {
        Self { tick_color: Some(color), ..self }
    }

    /// Same style attached to axis `index`.
    pub fn for_axis(self, index: usize) -> Self {
        Self { index, ..self }
    }

    pub fn index(&self) -> usize { self.index }
}

impl fmt::Display for AxisStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Later fields need the earlier slots filled; fall back to the API defaults.
        let control = self.drawing_control.or(self.tick_color.map(|_| DrawingControl::default()));
        let alignment = self.alignment.or(control.map(|_| AxisAlignment::default()));
        let record = Record::new()
            .field(self.index)
            .field(self.color)
            .num(self.font_size)
            .opt(alignment)
            .opt(control)
            .opt(self.tick_color);
        write!(f, "{record}")
    }
}

/// `chxs`: `index,color,size[,alignment[,control[,tick_color]]]|...`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisStylesParameter {
    entries: Vec<AxisStyle>,
}

impl Parameter for AxisStylesParameter {
    fn key(&self) -> &'static str { Self::KEY }
    fn value(&self) -> String { join_records(&self.entries) }
}

impl Accumulating for AxisStylesParameter {
    const KEY: &'static str = "chxs";
    type Entry = AxisStyle;

    fn push(&mut self, entry: AxisStyle) { self.entries.push(entry); }
    fn entries(&self) -> &[AxisStyle] { &self.entries }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_record_grammar() {
        let mut p = AxisLabelsParameter::default();
        p.push(AxisLabels::new(0, ["Jan", "Feb"]));
        p.push(AxisLabels::new(2, ["low", "very high"]));
        assert_eq!(p.value(), "0:|Jan|Feb|2:|low|very%20high");
    }

    #[test]
    fn style_fills_interior_slots() {
        let s = AxisStyle::new(1, Color::BLUE, 12.0).unwrap().with_tick_color(Color::RED);
        assert_eq!(s.to_string(), "1,0000FF,12,0,lt,FF0000");
        let plain = AxisStyle::new(0, Color::BLACK, 11.5).unwrap();
        assert_eq!(plain.to_string(), "0,000000,11.5");
    }

    #[test]
    fn range_with_interval() {
        let r = AxisRange::new(2, 10.0, 0.0).unwrap().with_interval(2.5).unwrap();
        assert_eq!(r.to_string(), "2,10.0,0.0,2.5");
        assert!(AxisRange::new(0, f64::NAN, 1.0).is_err());
        assert!(AxisRange::new(0, 0.0, 1.0).unwrap().with_interval(0.0).is_err());
    }
}
