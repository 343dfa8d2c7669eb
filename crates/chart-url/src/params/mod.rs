// File: crates/chart-url/src/params/mod.rs
// Summary: Parameter traits (one wire key, one rendered value) and the concrete parameter set.

use std::any::Any;
use std::fmt;

pub mod axis;
pub mod bar;
pub mod basic;
pub mod data;
pub mod fill;
pub mod geo;
pub mod marker;

pub use axis::{
    AxisAlignment, AxisLabels, AxisLabelsParameter, AxisLabelPositions, AxisLabelPositionsParameter, AxisRange,
    AxisRangesParameter, AxisStyle, AxisStylesParameter, AxisType, AxisTypesParameter, DrawingControl,
};
pub use bar::{BarWidth, BarWidthAndSpacingParameter, BarZeroLinesParameter, PieOrientationParameter};
pub use basic::{
    ChartSizeParameter, ChartTitleParameter, ChartTitleStyleParameter, ChartType, ChartTypeParameter,
    ColorsParameter, GridLinesParameter, LegendParameter, LegendPosition, LegendPositionParameter,
    MarginsParameter, PieLabelsParameter,
};
pub use data::DataParameter;
pub use fill::{Fill, FillTarget, FillsParameter, LineStyle, LineStylesParameter};
pub use geo::{GeoCodesParameter, GeographicalArea, GeographicalAreaParameter};
pub use marker::{Marker, MarkerShape, MarkersParameter, RangeOrientation};

/// Type-erasure hook so the manager can find the concrete parameter behind a key.
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any { self }
    fn as_any_mut(&mut self) -> &mut dyn Any { self }
}

/// A named, independently renderable unit of chart configuration.
///
/// `value` returns the raw wire value (text fields already percent-encoded);
/// an empty value means the parameter is left out of the URL.
pub trait Parameter: AsAny + fmt::Debug {
    /// Wire key, e.g. `cht` or `chxr`.
    fn key(&self) -> &'static str;
    /// Rendered value for this key.
    fn value(&self) -> String;
}

/// A parameter that collects entries instead of being replaced wholesale
/// (markers, axis ranges, fills...).
pub trait Accumulating: Parameter + Default + 'static {
    /// Wire key shared by every instance.
    const KEY: &'static str;
    /// One record of the parameter's value.
    type Entry;

    /// Add one entry at the end.
    fn push(&mut self, entry: Self::Entry);
    /// Entries in insertion order.
    fn entries(&self) -> &[Self::Entry];
}
