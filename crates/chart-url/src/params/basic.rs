// File: crates/chart-url/src/params/basic.rs
// Summary: Singleton parameters: chart type, size, title, colors, legend, pie labels, margins, grid.

use std::fmt;

use crate::color::Color;
use crate::error::{ensure_positive, ensure_within, ChartError, Result};
use crate::grammar::{encode_text, join_fields, join_records, Record};
use crate::params::Parameter;
use crate::types::{Margins, MAX_DIMENSION, MAX_PIXELS, VALUE_MAX};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartType {
    Line,
    LineXY,
    Sparkline,
    BarVerticalStacked,
    BarVerticalGrouped,
    BarVerticalOverlapped,
    BarHorizontalStacked,
    BarHorizontalGrouped,
    Pie,
    Pie3D,
    PieConcentric,
    Radar,
    RadarSpline,
    Scatter,
    Venn,
    GoogleOMeter,
    Map,
}

impl ChartType {
    /// Code the API expects in `cht`.
    pub const fn code(self) -> &'static str {
        match self {
            ChartType::Line => "lc",
            ChartType::LineXY => "lxy",
            ChartType::Sparkline => "ls",
            ChartType::BarVerticalStacked => "bvs",
            ChartType::BarVerticalGrouped => "bvg",
            ChartType::BarVerticalOverlapped => "bvo",
            ChartType::BarHorizontalStacked => "bhs",
            ChartType::BarHorizontalGrouped => "bhg",
            ChartType::Pie => "p",
            ChartType::Pie3D => "p3",
            ChartType::PieConcentric => "pc",
            ChartType::Radar => "r",
            ChartType::RadarSpline => "rs",
            ChartType::Scatter => "s",
            ChartType::Venn => "v",
            ChartType::GoogleOMeter => "gom",
            ChartType::Map => "t",
        }
    }

    pub const fn is_bar(self) -> bool {
        matches!(
            self,
            ChartType::BarVerticalStacked
                | ChartType::BarVerticalGrouped
                | ChartType::BarVerticalOverlapped
                | ChartType::BarHorizontalStacked
                | ChartType::BarHorizontalGrouped
        )
    }

    pub const fn is_pie(self) -> bool {
        matches!(self, ChartType::Pie | ChartType::Pie3D | ChartType::PieConcentric)
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// `cht`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartTypeParameter(pub ChartType);

impl Parameter for ChartTypeParameter {
    fn key(&self) -> &'static str { "cht" }
    fn value(&self) -> String { self.0.to_string() }
}

/// `chs`: `WxH`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartSizeParameter {
    width: u32,
    height: u32,
}

impl ChartSizeParameter {
    /// Validate against the API limits: both sides positive and at most
    /// 1000 px, and at most 300,000 px in total.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ChartError::InvalidSize { width, height, reason: "sides must be positive" });
        }
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(ChartError::InvalidSize { width, height, reason: "a side exceeds 1000 px" });
        }
        if width as u64 * height as u64 > MAX_PIXELS as u64 {
            return Err(ChartError::InvalidSize { width, height, reason: "area exceeds 300000 px" });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }
}

impl Parameter for ChartSizeParameter {
    fn key(&self) -> &'static str { "chs" }
    fn value(&self) -> String { format!("{}x{}", self.width, self.height) }
}

/// `chtt`: one entry per title line.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartTitleParameter {
    lines: Vec<String>,
}

impl ChartTitleParameter {
    /// Title text; `\n` starts a new line.
    pub fn new(title: impl AsRef<str>) -> Self {
        let title = title.as_ref();
        let lines = if title.is_empty() { Vec::new() } else { title.lines().map(str::to_string).collect() };
        Self { lines }
    }
}

impl Parameter for ChartTitleParameter {
    fn key(&self) -> &'static str { "chtt" }
    fn value(&self) -> String { join_records(self.lines.iter().map(|l| encode_text(l))) }
}

/// `chts`: `color,font_size`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartTitleStyleParameter {
    color: Color,
    font_size: f64,
}

impl ChartTitleStyleParameter {
    pub fn new(color: Color, font_size: f64) -> Result<Self> {
        ensure_positive("title font size", font_size)?;
        Ok(Self { color, font_size })
    }
}

impl Parameter for ChartTitleStyleParameter {
    fn key(&self) -> &'static str { "chts" }
    fn value(&self) -> String { Record::new().field(self.color).num(self.font_size).to_string() }
}

/// `chco`: series colors `,`-joined, or per-point colors (pie slices,
/// individual bars) `|`-joined.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorsParameter {
    colors: Vec<Color>,
    per_point: bool,
}

impl ColorsParameter {
    pub fn per_series(colors: Vec<Color>) -> Self {
        Self { colors, per_point: false }
    }

    pub fn per_point(colors: Vec<Color>) -> Self {
        Self { colors, per_point: true }
    }

    pub fn colors(&self) -> &[Color] { &self.colors }
}

impl Parameter for ColorsParameter {
    fn key(&self) -> &'static str { "chco" }
    fn value(&self) -> String {
        if self.per_point {
            join_records(&self.colors)
        } else {
            join_fields(&self.colors)
        }
    }
}

/// `chdl`: per-series legend labels.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendParameter(pub Vec<String>);

impl Parameter for LegendParameter {
    fn key(&self) -> &'static str { "chdl" }
    fn value(&self) -> String { join_records(self.0.iter().map(|l| encode_text(l))) }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LegendPosition {
    Bottom,
    Top,
    #[default]
    Right,
    Left,
    /// Bottom, entries stacked vertically.
    BottomVertical,
    /// Top, entries stacked vertically.
    TopVertical,
}

impl LegendPosition {
    pub const fn code(self) -> &'static str {
        match self {
            LegendPosition::Bottom => "b",
            LegendPosition::Top => "t",
            LegendPosition::Right => "r",
            LegendPosition::Left => "l",
            LegendPosition::BottomVertical => "bv",
            LegendPosition::TopVertical => "tv",
        }
    }
}

/// `chdlp`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendPositionParameter(pub LegendPosition);

impl Parameter for LegendPositionParameter {
    fn key(&self) -> &'static str { "chdlp" }
    fn value(&self) -> String { self.0.code().to_string() }
}

/// `chl`: slice labels for pie charts (and the needle label of a meter).
#[derive(Clone, Debug, PartialEq)]
pub struct PieLabelsParameter(pub Vec<String>);

impl Parameter for PieLabelsParameter {
    fn key(&self) -> &'static str { "chl" }
    fn value(&self) -> String { join_records(self.0.iter().map(|l| encode_text(l))) }
}

/// `chma`: `left,right,top,bottom[|legend_width,legend_height]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarginsParameter {
    margins: Margins,
    legend: Option<(u32, u32)>,
}

impl MarginsParameter {
    pub fn new(margins: Margins) -> Self {
        Self { margins, legend: None }
    }

    /// Reserve `width x height` pixels for the legend.
    pub fn with_legend(self, width: u32, height: u32) -> Self {
        Self { legend: Some((width, height)), ..self }
    }

    pub fn margins(&self) -> Margins { self.margins }
}

impl Parameter for MarginsParameter {
    fn key(&self) -> &'static str { "chma" }
    fn value(&self) -> String {
        let m = self.margins;
        let mut records = vec![Record::new().field(m.left).field(m.right).field(m.top).field(m.bottom)];
        if let Some((w, h)) = self.legend {
            records.push(Record::new().field(w).field(h));
        }
        join_records(records)
    }
}

/// `chg`: `x_step,y_step[,dash,space]`, steps in percent of the chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLinesParameter {
    x_step: f64,
    y_step: f64,
    dash: Option<(f64, f64)>,
}

impl GridLinesParameter {
    pub fn new(x_step: f64, y_step: f64) -> Result<Self> {
        ensure_within("x grid step", x_step, 0.0, VALUE_MAX)?;
        ensure_within("y grid step", y_step, 0.0, VALUE_MAX)?;
        Ok(Self { x_step, y_step, dash: None })
    }

    /// Dashed lines: `dash` px drawn, `space` px skipped.
    pub fn dashed(self, dash: f64, space: f64) -> Result<Self> {
        ensure_positive("grid dash length", dash)?;
        ensure_within("grid space length", space, 0.0, f64::MAX)?;
        Ok(Self { dash: Some((dash, space)), ..self })
    }
}

impl Parameter for GridLinesParameter {
    fn key(&self) -> &'static str { "chg" }
    fn value(&self) -> String {
        Record::new()
            .num(self.x_step)
            .num(self.y_step)
            .opt_num(self.dash.map(|d| d.0))
            .opt_num(self.dash.map(|d| d.1))
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_limits() {
        assert_eq!(ChartSizeParameter::new(600, 400).unwrap().value(), "600x400");
        assert!(ChartSizeParameter::new(0, 400).is_err());
        assert!(ChartSizeParameter::new(1001, 10).is_err());
        assert!(ChartSizeParameter::new(1000, 301).is_err());
        assert!(ChartSizeParameter::new(1000, 300).is_ok());
    }

    #[test]
    fn title_lines_are_encoded_and_piped() {
        let p = ChartTitleParameter::new("Monthly sales\nEurope & Asia");
        assert_eq!(p.value(), "Monthly%20sales|Europe%20%26%20Asia");
        assert_eq!(ChartTitleParameter::new("").value(), "");
    }

    #[test]
    fn color_separators() {
        let colors = vec![Color::RED, Color::BLUE.with_alpha(50).unwrap()];
        assert_eq!(ColorsParameter::per_series(colors.clone()).value(), "FF0000,0000FF80");
        assert_eq!(ColorsParameter::per_point(colors).value(), "FF0000|0000FF80");
        assert_eq!(ColorsParameter::per_series(Vec::new()).value(), "");
    }

    #[test]
    fn margins_with_legend() {
        let p = MarginsParameter::new(Margins::new(1, 2, 3, 4)).with_legend(50, 20);
        assert_eq!(p.value(), "1,2,3,4|50,20");
    }

    #[test]
    fn grid_optional_dash() {
        assert_eq!(GridLinesParameter::new(20.0, 50.0).unwrap().value(), "20,50");
        let dashed = GridLinesParameter::new(10.0, 12.5).unwrap().dashed(3.0, 2.0).unwrap();
        assert_eq!(dashed.value(), "10,12.5,3,2");
    }
}
