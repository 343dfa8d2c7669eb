// File: crates/chart-url/src/grammar.rs
// Summary: Value grammar shared by the composite parameters.
//
//   value   := record ( "|" record )*
//   record  := field ( "," field )*
//   field   := number | color | text | sub ( ":" sub )*
//
// Records drop unset trailing fields; interior fields always keep their slot.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{ensure_positive, ensure_within, ChartError, Result};
use crate::types::VALUE_MAX;

/// Separator between records.
pub const RECORD_SEP: char = '|';
/// Separator between fields of one record.
pub const FIELD_SEP: char = ',';
/// Separator between sub-fields (index ranges, coordinates).
pub const SUB_SEP: char = ':';

/// Characters left as-is in text fields: RFC 3986 unreserved.
const QUERY_TEXT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Percent-encode free text (titles, legends, labels) for a query component.
pub fn encode_text(text: &str) -> String {
    utf8_percent_encode(text, QUERY_TEXT).to_string()
}

/// Digits kept when a percentage is rendered as a fraction of the chart.
const FRACTION_DIGITS: usize = 12;

/// Shortest decimal form: `100` rather than `100.0`, `33.3` kept as is.
pub fn fmt_num(v: f64) -> String {
    if v == 0.0 {
        // folds -0.0 into 0
        return "0".to_string();
    }
    format!("{}", v)
}

/// A percentage in `[0, 100]` as a fraction of 1 (`33.3` becomes `0.333`).
/// Rounded to a fixed number of digits so float division noise is dropped.
pub fn fmt_fraction(percent: f64) -> String {
    let text = format!("{:.*}", FRACTION_DIGITS, percent / VALUE_MAX);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "-0" => "0".to_string(),
        t => t.to_string(),
    }
}

/// Decimal form that always carries a fractional digit (`0.0`, `100.0`, `33.3`).
pub fn fmt_decimal(v: f64) -> String {
    let v = if v == 0.0 { 0.0 } else { v };
    if v.fract() == 0.0 && v.is_finite() {
        format!("{:.1}", v)
    } else {
        format!("{}", v)
    }
}

/// One `,`-separated tuple.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    fields: Vec<Option<String>>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a required field.
    pub fn field(mut self, value: impl fmt::Display) -> Self {
        self.fields.push(Some(value.to_string()));
        self
    }

    /// Append an optional field; unset trailing fields are not rendered.
    pub fn opt<T: fmt::Display>(mut self, value: Option<T>) -> Self {
        self.fields.push(value.map(|v| v.to_string()));
        self
    }

    /// Append a numeric field in shortest form.
    pub fn num(self, value: f64) -> Self {
        self.field(fmt_num(value))
    }

    /// Append an optional numeric field in shortest form.
    pub fn opt_num(self, value: Option<f64>) -> Self {
        self.opt(value.map(fmt_num))
    }

    /// Number of fields that will be rendered.
    pub fn len(&self) -> usize {
        self.fields.iter().rposition(Option::is_some).map_or(0, |i| i + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields[..self.len()].iter().enumerate() {
            if i > 0 {
                write!(f, "{FIELD_SEP}")?;
            }
            if let Some(v) = field {
                f.write_str(v)?;
            }
        }
        Ok(())
    }
}

/// Join rendered items with `|`. Returns the empty string for no items
/// without rendering anything.
pub fn join_records<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    let mut iter = items.into_iter().peekable();
    if iter.peek().is_none() {
        return String::new();
    }
    iter.map(|r| r.to_string()).collect::<Vec<_>>().join("|")
}

/// Join rendered items with `,`.
pub fn join_fields<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    items.into_iter().map(|r| r.to_string()).collect::<Vec<_>>().join(",")
}

/// Which data points of a series a marker applies to.
///
/// Built only through the constructors, so an inverted range or a zero
/// step never reaches the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointSelection(Selection);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Selection {
    /// Every point (`-1`).
    All,
    /// Every n-th point (`-n`), n >= 1.
    Every(usize),
    Index(usize),
    /// `start..end` (end exclusive, non-empty) taking every `step`-th point.
    Range { start: usize, end: usize, step: usize },
}

impl PointSelection {
    /// Every point of the series.
    pub const ALL: Self = Self(Selection::All);

    /// A single point.
    pub const fn index(i: usize) -> Self {
        Self(Selection::Index(i))
    }

    /// Points `start..end` with the default step of 1.
    pub fn range(start: usize, end: usize) -> Result<Self> {
        Self::range_step(start, end, 1)
    }

    /// Points `start..end` taking every `step`-th one.
    pub fn range_step(start: usize, end: usize, step: usize) -> Result<Self> {
        if end <= start {
            return Err(ChartError::InvertedRange { start, end });
        }
        ensure_positive("range step", step as f64)?;
        Ok(Self(Selection::Range { start, end, step }))
    }

    /// Every `n`-th point.
    pub fn every(n: usize) -> Result<Self> {
        ensure_positive("point interval", n as f64)?;
        Ok(Self(Selection::Every(n)))
    }
}

impl fmt::Display for PointSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Selection::All => f.write_str("-1"),
            Selection::Every(n) => write!(f, "-{n}"),
            Selection::Index(i) => write!(f, "{i}"),
            Selection::Range { start, end, .. } if start.checked_add(1) == Some(end) => write!(f, "{start}"),
            Selection::Range { start, end, step: 1 } => write!(f, "{start}{SUB_SEP}{}", end.saturating_sub(1)),
            Selection::Range { start, end, step } => {
                write!(f, "{start}{SUB_SEP}{}{SUB_SEP}{step}", end.saturating_sub(1))
            }
        }
    }
}

/// Coordinate-relative position of a free-floating marker.
/// Inputs are percentages; the wire form is `x:y` in fractions of the chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    x: f64,
    y: f64,
}

impl Position {
    /// `x` and `y` in `[0, 100]`, measured from the bottom-left corner.
    pub fn new(x: f64, y: f64) -> Result<Self> {
        ensure_within("x position", x, 0.0, VALUE_MAX)?;
        ensure_within("y position", y, 0.0, VALUE_MAX)?;
        Ok(Self { x, y })
    }

    pub fn x(&self) -> f64 { self.x }
    pub fn y(&self) -> f64 { self.y }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SUB_SEP}{}", fmt_fraction(self.x), fmt_fraction(self.y))
    }
}

/// Drawing order relative to the chart's lines and bars.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = match self {
            Priority::Low => "-1",
            Priority::Normal => "0",
            Priority::High => "1",
        };
        f.write_str(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_unset_fields_are_dropped() {
        let r = Record::new().field(1).opt(None::<u8>).field("x").opt(None::<u8>).opt(None::<u8>);
        assert_eq!(r.to_string(), "1,,x");
        assert_eq!(r.len(), 3);
    }

    #[test]
    fn numbers() {
        assert_eq!(fmt_num(100.0), "100");
        assert_eq!(fmt_num(33.3), "33.3");
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(-2.5), "-2.5");
        assert_eq!(fmt_decimal(0.0), "0.0");
        assert_eq!(fmt_decimal(-0.0), "0.0");
        assert_eq!(fmt_decimal(51.0), "51.0");
        assert_eq!(fmt_decimal(33.3), "33.3");
    }

    #[test]
    fn fractions_keep_the_input_decimals() {
        assert_eq!(fmt_fraction(33.3), "0.333");
        assert_eq!(fmt_fraction(70.0), "0.7");
        assert_eq!(fmt_fraction(12.34), "0.1234");
        assert_eq!(fmt_fraction(100.0), "1");
        assert_eq!(fmt_fraction(0.0), "0");
        assert_eq!(fmt_fraction(0.1), "0.001");
        assert_eq!(Position::new(33.3, 70.0).unwrap().to_string(), "0.333:0.7");
    }

    #[test]
    fn selections_at_the_index_limit_render() {
        assert_eq!(PointSelection::range(usize::MAX - 1, usize::MAX).unwrap().to_string(), (usize::MAX - 1).to_string());
        assert_eq!(PointSelection::range(0, usize::MAX).unwrap().to_string(), format!("0:{}", usize::MAX - 1));
        assert_eq!(PointSelection::range_step(3, 4, 5).unwrap().to_string(), "3");
        assert_eq!(PointSelection::index(0).to_string(), "0");
        assert_eq!(PointSelection::ALL.to_string(), "-1");
    }

    #[test]
    fn empty_join_is_empty() {
        assert_eq!(join_records(Vec::<Record>::new()), "");
        assert_eq!(join_records(["a", "b"]), "a|b");
    }

    #[test]
    fn text_encoding_keeps_unreserved() {
        assert_eq!(encode_text("a-b_c.d~e"), "a-b_c.d~e");
        assert_eq!(encode_text("Sales & Profit"), "Sales%20%26%20Profit");
        assert_eq!(encode_text("x|y,z:w"), "x%7Cy%2Cz%3Aw");
    }
}
