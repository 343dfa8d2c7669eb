// File: crates/chart-url/src/params/geo.rs
// Summary: Map parameters: geographical area (`chtm`) and region codes (`chld`).

use crate::grammar::{encode_text, join_records};
use crate::params::{Accumulating, Parameter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeographicalArea {
    Africa,
    Asia,
    Europe,
    MiddleEast,
    SouthAmerica,
    Usa,
    World,
}

impl GeographicalArea {
    pub const fn code(self) -> &'static str {
        match self {
            GeographicalArea::Africa => "africa",
            GeographicalArea::Asia => "asia",
            GeographicalArea::Europe => "europe",
            GeographicalArea::MiddleEast => "middle_east",
            GeographicalArea::SouthAmerica => "south_america",
            GeographicalArea::Usa => "usa",
            GeographicalArea::World => "world",
        }
    }
}

/// `chtm`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeographicalAreaParameter(pub GeographicalArea);

impl Parameter for GeographicalAreaParameter {
    fn key(&self) -> &'static str { "chtm" }
    fn value(&self) -> String { self.0.code().to_string() }
}

/// `chld`: region codes (ISO 3166 countries, US states) in data order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoCodesParameter {
    codes: Vec<String>,
}

impl Parameter for GeoCodesParameter {
    fn key(&self) -> &'static str { Self::KEY }
    fn value(&self) -> String { join_records(self.codes.iter().map(|c| encode_text(c))) }
}

impl Accumulating for GeoCodesParameter {
    const KEY: &'static str = "chld";
    type Entry = String;

    fn push(&mut self, entry: String) { self.codes.push(entry); }
    fn entries(&self) -> &[String] { &self.codes }
}
