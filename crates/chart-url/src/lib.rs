// File: crates/chart-url/src/lib.rs
// Summary: Library entry point; exports the series codec, parameters, manager, chart façade and URL parsing.

pub mod error;
pub mod types;
pub mod series;
pub mod encoding;
pub mod color;
pub mod grammar;
pub mod params;
pub mod manager;
pub mod query;
pub mod axis;
pub mod chart;

pub use error::{ChartError, Result};
pub use series::{BoundedSeries, EncodingScheme};
pub use encoding::{encode_data, encode_series};
pub use color::Color;
pub use grammar::{PointSelection, Position, Priority};
pub use params::{Accumulating, Parameter};
pub use manager::ParameterManager;
pub use query::{equivalent, ChartUrl};
pub use axis::AxisInfo;
pub use chart::{Chart, Colorable, Legendable, Markable, Plot, Slice, UrlOptions};
