// File: crates/chart-url/src/manager.rs
// Summary: Parameter manager; one live parameter per key, renders `base?key=value&...`.

use std::collections::BTreeMap;
use std::fmt;

use log::{debug, trace, warn};

use crate::params::{Accumulating, Parameter};
use crate::types::BASE_URL;

fn boxed<P: Parameter + 'static>(param: P) -> Box<dyn Parameter> {
    Box::new(param)
}

/// Owns every parameter of one chart build.
///
/// Singleton parameters go through [`set`](Self::set) (last write wins);
/// accumulating ones collect entries through [`append`](Self::append).
/// Keys render in sorted order, but consumers should compare URLs by
/// their parsed key/value pairs.
pub struct ParameterManager {
    base_url: String,
    params: BTreeMap<&'static str, Box<dyn Parameter>>,
}

impl ParameterManager {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), params: BTreeMap::new() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Register `param` under its key, returning whatever it replaced.
    pub fn set<P: Parameter + 'static>(&mut self, param: P) -> Option<Box<dyn Parameter>> {
        self.set_boxed(boxed(param))
    }

    /// [`set`](Self::set) for an already boxed parameter.
    pub fn set_boxed(&mut self, param: Box<dyn Parameter>) -> Option<Box<dyn Parameter>> {
        let key = param.key();
        let previous = self.params.insert(key, param);
        if previous.is_some() {
            debug!("parameter `{key}` replaced");
        }
        previous
    }

    /// Add one entry to the accumulating parameter `P`, creating it on first use.
    /// A different parameter type registered under the same key is dropped.
    pub fn append<P: Accumulating>(&mut self, entry: P::Entry) {
        let slot = self.params.entry(P::KEY).or_insert_with(|| boxed(P::default()));
        match (**slot).as_any_mut().downcast_mut::<P>() {
            Some(param) => param.push(entry),
            None => {
                warn!("parameter `{}` held another type; replacing it to append", P::KEY);
                let mut param = P::default();
                param.push(entry);
                *slot = boxed(param);
            }
        }
    }

    /// [`append`](Self::append) for each entry in order.
    pub fn extend<P, I>(&mut self, entries: I)
    where
        P: Accumulating,
        I: IntoIterator<Item = P::Entry>,
    {
        for entry in entries {
            self.append::<P>(entry);
        }
    }

    /// Parameter registered under `key`.
    pub fn get(&self, key: &str) -> Option<&dyn Parameter> {
        self.params.get(key).map(|p| &**p)
    }

    /// Concrete parameter registered under `key`, if it has type `P`.
    pub fn get_as<P: Parameter + 'static>(&self, key: &str) -> Option<&P> {
        self.params.get(key).and_then(|p| (**p).as_any().downcast_ref::<P>())
    }

    /// Entries collected so far by the accumulating parameter `P`.
    pub fn entries<P: Accumulating>(&self) -> &[P::Entry] {
        self.get_as::<P>(P::KEY).map(|p| p.entries()).unwrap_or(&[])
    }

    pub fn remove(&mut self, key: &str) -> Option<Box<dyn Parameter>> {
        self.params.remove(key)
    }

    /// Registered keys, including those whose value is currently empty.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.params.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// `key=value` pairs joined with `&`; parameters with an empty value are left out.
    pub fn query(&self) -> String {
        let mut pairs = Vec::with_capacity(self.params.len());
        for (key, param) in &self.params {
            let value = param.value();
            if value.is_empty() {
                trace!("eliding empty parameter `{key}`");
                continue;
            }
            trace!("{key}={value}");
            pairs.push(format!("{key}={value}"));
        }
        debug!("rendered {} of {} parameters", pairs.len(), self.params.len());
        pairs.join("&")
    }

    /// Full chart URL: base URL, `?`, then [`query`](Self::query).
    /// With nothing to render, only the base URL is returned.
    pub fn render(&self) -> String {
        let query = self.query();
        if query.is_empty() {
            return self.base_url.clone();
        }
        format!("{}?{}", self.base_url, query)
    }
}

impl Default for ParameterManager {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ParameterManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterManager")
            .field("base_url", &self.base_url)
            .field("params", &self.params)
            .finish()
    }
}

impl fmt::Display for ParameterManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::grammar::PointSelection;
    use crate::params::{Marker, MarkerShape, MarkersParameter};

    #[derive(Debug)]
    struct RawMarkers(&'static str);

    impl Parameter for RawMarkers {
        fn key(&self) -> &'static str { "chm" }
        fn value(&self) -> String { self.0.to_string() }
    }

    #[test]
    fn append_displaces_foreign_type_under_same_key() {
        let mut pm = ParameterManager::new();
        pm.set(RawMarkers("o,000000,0,-1,5"));
        let m = Marker::shape(MarkerShape::X, Color::RED, 1, PointSelection::index(2), 4.0).unwrap();
        pm.append::<MarkersParameter>(m);
        assert!(pm.get_as::<RawMarkers>("chm").is_none());
        assert_eq!(pm.entries::<MarkersParameter>().len(), 1);
        assert_eq!(pm.query(), "chm=x,FF0000,1,2,4");
    }

    #[test]
    fn empty_manager_renders_base_only() {
        let pm = ParameterManager::with_base_url("http://localhost/chart");
        assert_eq!(pm.render(), "http://localhost/chart");
        assert!(pm.is_empty());
    }
}
