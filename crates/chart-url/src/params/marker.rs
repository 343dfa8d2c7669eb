// File: crates/chart-url/src/params/marker.rs
// Summary: `chm` markers: shapes, text, lines, free-floating markers, range bands and area fills.

use std::fmt;

use crate::color::Color;
use crate::error::{ensure_positive, ensure_within, ChartError, Result};
use crate::grammar::{encode_text, fmt_fraction, join_records, PointSelection, Position, Priority, Record};
use crate::params::{Accumulating, Parameter};
use crate::types::VALUE_MAX;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerShape {
    Arrow,
    Cross,
    Diamond,
    Circle,
    Square,
    /// Vertical line from the x-axis to the point.
    VerticalLine,
    /// Vertical line across the whole chart.
    VerticalFullLine,
    /// Horizontal line across the chart.
    HorizontalLine,
    X,
}

impl MarkerShape {
    pub const fn code(self) -> char {
        match self {
            MarkerShape::Arrow => 'a',
            MarkerShape::Cross => 'c',
            MarkerShape::Diamond => 'd',
            MarkerShape::Circle => 'o',
            MarkerShape::Square => 's',
            MarkerShape::VerticalLine => 'v',
            MarkerShape::VerticalFullLine => 'V',
            MarkerShape::HorizontalLine => 'h',
            MarkerShape::X => 'x',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeOrientation {
    /// Band across the chart between two y positions.
    Horizontal,
    /// Band up the chart between two x positions.
    Vertical,
}

#[derive(Clone, Debug, PartialEq)]
enum Kind {
    Shape { shape: MarkerShape, series: usize, points: PointSelection, size: f64 },
    Text { text: String, series: usize, points: PointSelection, size: f64 },
    Line { series: usize, points: PointSelection, width: f64 },
    FreeShape { shape: MarkerShape, position: Position, size: f64 },
    FreeText { text: String, position: Position, size: f64 },
    Range { orientation: RangeOrientation, start: f64, end: f64 },
    FillToAxis { series: usize },
    FillBetween { from: usize, to: usize },
}

/// One `chm` entry.
///
/// Index-relative markers carry a series index; [`Marker::for_series`]
/// rewrites it when a plot-level marker is placed into a whole chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    kind: Kind,
    color: Color,
    priority: Option<Priority>,
}

impl Marker {
    fn of(kind: Kind, color: Color) -> Self {
        Self { kind, color, priority: None }
    }

    /// Shape drawn at the selected points of a series.
    pub fn shape(shape: MarkerShape, color: Color, series: usize, points: PointSelection, size: f64) -> Result<Self> {
        ensure_positive("marker size", size)?;
        Ok(Self::of(Kind::Shape { shape, series, points, size }, color))
    }

    /// Text drawn at the selected points of a series.
    pub fn text(
        text: impl Into<String>,
        color: Color,
        series: usize,
        points: PointSelection,
        size: f64,
    ) -> Result<Self> {
        ensure_positive("marker size", size)?;
        Ok(Self::of(Kind::Text { text: text.into(), series, points, size }, color))
    }

    /// Line through the selected points of a series.
    pub fn line(color: Color, series: usize, points: PointSelection, width: f64) -> Result<Self> {
        ensure_positive("line marker width", width)?;
        Ok(Self::of(Kind::Line { series, points, width }, color))
    }

    /// Shape placed at chart coordinates rather than at a data point.
    pub fn free_shape(shape: MarkerShape, color: Color, position: Position, size: f64) -> Result<Self> {
        ensure_positive("marker size", size)?;
        Ok(Self::of(Kind::FreeShape { shape, position, size }, color))
    }

    /// Text placed at chart coordinates rather than at a data point.
    pub fn free_text(text: impl Into<String>, color: Color, position: Position, size: f64) -> Result<Self> {
        ensure_positive("marker size", size)?;
        Ok(Self::of(Kind::FreeText { text: text.into(), position, size }, color))
    }

    /// Colored band between `start` and `end`, both in `[0, 100]` percent of the chart.
    pub fn range(orientation: RangeOrientation, color: Color, start: f64, end: f64) -> Result<Self> {
        ensure_within("range start", start, 0.0, VALUE_MAX)?;
        ensure_within("range end", end, 0.0, VALUE_MAX)?;
        if end < start {
            return Err(ChartError::OutOfRange { what: "range end", value: end, min: start, max: VALUE_MAX });
        }
        Ok(Self::of(Kind::Range { orientation, start, end }, color))
    }

    /// Fill the area between a series and the x-axis.
    pub fn fill_to_axis(color: Color, series: usize) -> Self {
        Self::of(Kind::FillToAxis { series }, color)
    }

    /// Fill the area between two series.
    pub fn fill_between(color: Color, from: usize, to: usize) -> Self {
        Self::of(Kind::FillBetween { from, to }, color)
    }

    /// Drawing order. Rendered for shape, text, line and free markers only.
    pub fn with_priority(self, priority: Priority) -> Self {
        Self { priority: Some(priority), ..self }
    }

    /// Same marker bound to series `index`. Free markers, ranges and
    /// between-series fills are returned unchanged.
    pub fn for_series(self, index: usize) -> Self {
        let kind = match self.kind {
            Kind::Shape { shape, points, size, .. } => Kind::Shape { shape, series: index, points, size },
            Kind::Text { text, points, size, .. } => Kind::Text { text, series: index, points, size },
            Kind::Line { points, width, .. } => Kind::Line { series: index, points, width },
            Kind::FillToAxis { .. } => Kind::FillToAxis { series: index },
            other => other,
        };
        Self { kind, ..self }
    }

    pub fn color(&self) -> Color { self.color }

    fn record(&self) -> Record {
        let color = self.color;
        match &self.kind {
            Kind::Shape { shape, series, points, size } => Record::new()
                .field(shape.code())
                .field(color)
                .field(series)
                .field(points)
                .num(*size)
                .opt(self.priority),
            Kind::Text { text, series, points, size } => Record::new()
                .field(format!("t{}", encode_text(text)))
                .field(color)
                .field(series)
                .field(points)
                .num(*size)
                .opt(self.priority),
            Kind::Line { series, points, width } => Record::new()
                .field('D')
                .field(color)
                .field(series)
                .field(points)
                .num(*width)
                .opt(self.priority),
            Kind::FreeShape { shape, position, size } => Record::new()
                .field(format!("@{}", shape.code()))
                .field(color)
                .field(0)
                .field(position)
                .num(*size)
                .opt(self.priority),
            Kind::FreeText { text, position, size } => Record::new()
                .field(format!("@t{}", encode_text(text)))
                .field(color)
                .field(0)
                .field(position)
                .num(*size)
                .opt(self.priority),
            Kind::Range { orientation, start, end } => Record::new()
                .field(match orientation {
                    RangeOrientation::Horizontal => 'r',
                    RangeOrientation::Vertical => 'R',
                })
                .field(color)
                .field(0)
                .field(fmt_fraction(*start))
                .field(fmt_fraction(*end)),
            Kind::FillToAxis { series } => Record::new().field('B').field(color).field(series).field(0).field(0),
            Kind::FillBetween { from, to } => Record::new().field('b').field(color).field(from).field(to).field(0),
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.record())
    }
}

/// `chm`: every marker of the chart, `|`-joined.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarkersParameter {
    markers: Vec<Marker>,
}

impl Parameter for MarkersParameter {
    fn key(&self) -> &'static str { Self::KEY }
    fn value(&self) -> String { join_records(&self.markers) }
}

impl Accumulating for MarkersParameter {
    const KEY: &'static str = "chm";
    type Entry = Marker;

    fn push(&mut self, entry: Marker) { self.markers.push(entry); }
    fn entries(&self) -> &[Marker] { &self.markers }
}
