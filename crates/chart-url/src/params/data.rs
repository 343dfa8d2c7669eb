// File: crates/chart-url/src/params/data.rs
// Summary: `chd` parameter; wraps the series codec.

use crate::encoding::encode_data;
use crate::params::Parameter;
use crate::series::{BoundedSeries, EncodingScheme};

/// `chd`: every series of the chart under one scheme.
#[derive(Clone, Debug, PartialEq)]
pub struct DataParameter {
    scheme: EncodingScheme,
    series: Vec<BoundedSeries>,
}

impl DataParameter {
    pub fn new(scheme: EncodingScheme, series: Vec<BoundedSeries>) -> Self {
        Self { scheme, series }
    }

    pub fn scheme(&self) -> EncodingScheme { self.scheme }

    pub fn series(&self) -> &[BoundedSeries] { &self.series }
}

impl Parameter for DataParameter {
    fn key(&self) -> &'static str { "chd" }
    fn value(&self) -> String { encode_data(&self.series, self.scheme) }
}
