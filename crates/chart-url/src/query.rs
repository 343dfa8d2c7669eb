// File: crates/chart-url/src/query.rs
// Summary: Parse a rendered chart URL back into key/value pairs; re-render and compare by multiset.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use percent_encoding::percent_decode_str;

use crate::error::{ChartError, Result};

/// A chart URL split into its base and `key=value` pairs.
///
/// Equality ignores pair order: two URLs are equal when their bases match and
/// their pairs form the same multiset.
#[derive(Clone, Debug, Eq)]
pub struct ChartUrl {
    base: String,
    pairs: Vec<(String, String)>,
}

impl ChartUrl {
    pub fn parse(url: &str) -> Result<Self> {
        let (base, query) = url.split_once('?').unwrap_or((url, ""));
        if base.is_empty() {
            return Err(ChartError::MalformedQuery(format!("`{url}` has no base URL")));
        }
        let mut pairs = Vec::new();
        for segment in query.split('&').filter(|s| !s.is_empty()) {
            let (key, value) = segment
                .split_once('=')
                .ok_or_else(|| ChartError::MalformedQuery(format!("`{segment}` is not key=value")))?;
            if key.is_empty() {
                return Err(ChartError::MalformedQuery(format!("`{segment}` has an empty key")));
            }
            pairs.push((key.to_string(), value.to_string()));
        }
        Ok(Self { base: base.to_string(), pairs })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Pairs in the order they appeared.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Raw (still percent-encoded) value of the first pair with `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Percent-decoded value of the first pair with `key`.
    pub fn decoded(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|v| percent_decode_str(v).decode_utf8_lossy())
    }

    /// Value of `key` split into records (`|`) and fields (`,`).
    pub fn records(&self, key: &str) -> Option<Vec<Vec<&str>>> {
        self.get(key).map(|v| v.split('|').map(|r| r.split(',').collect()).collect())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Render back to `base?k=v&...`, keeping the parsed order.
    pub fn render(&self) -> String {
        if self.pairs.is_empty() {
            return self.base.clone();
        }
        let query = self.pairs.iter().map(|(k, v)| format!("{k}={v}")).collect::<Vec<_>>().join("&");
        format!("{}?{}", self.base, query)
    }

    fn sorted_pairs(&self) -> Vec<(&str, &str)> {
        let mut pairs = self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect::<Vec<_>>();
        pairs.sort_unstable();
        pairs
    }
}

impl PartialEq for ChartUrl {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base && self.sorted_pairs() == other.sorted_pairs()
    }
}

impl FromStr for ChartUrl {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ChartUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Whether two URLs carry the same base and the same key/value multiset.
pub fn equivalent(a: &str, b: &str) -> Result<bool> {
    Ok(ChartUrl::parse(a)? == ChartUrl::parse(b)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_does_not_matter() {
        assert!(equivalent("http://x/chart?a=1&b=2", "http://x/chart?b=2&a=1").unwrap());
        assert!(!equivalent("http://x/chart?a=1&b=2", "http://x/chart?a=1&b=3").unwrap());
        assert!(!equivalent("http://x/chart?a=1", "http://y/chart?a=1").unwrap());
    }

    #[test]
    fn duplicates_count() {
        assert!(!equivalent("http://x/c?a=1&a=1", "http://x/c?a=1").unwrap());
    }

    #[test]
    fn malformed_segments() {
        assert!(ChartUrl::parse("http://x/c?novalue").is_err());
        assert!(ChartUrl::parse("http://x/c?=v").is_err());
        assert!(ChartUrl::parse("?a=1").is_err());
        assert!(ChartUrl::parse("http://x/c?").unwrap().is_empty());
    }

    #[test]
    fn decoding_and_records() {
        let url = ChartUrl::parse("http://x/c?chtt=Sales%20%26%20Profit&chxr=0,0.0,100.0|1,0.0,51.0").unwrap();
        assert_eq!(url.decoded("chtt").unwrap(), "Sales & Profit");
        assert_eq!(url.records("chxr").unwrap(), vec![vec!["0", "0.0", "100.0"], vec!["1", "0.0", "51.0"]]);
    }
}
