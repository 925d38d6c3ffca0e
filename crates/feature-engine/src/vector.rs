//! Feature Vector Assembly

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use std::collections::HashMap;

/// A single feature value
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    /// Integral count (token or type totals)
    Count(u64),
    /// Real-valued ratio or statistic
    Ratio(f64),
}

impl FeatureValue {
    /// Value as a float
    pub fn as_f64(&self) -> f64 {
        match *self {
            FeatureValue::Count(n) => n as f64,
            FeatureValue::Ratio(x) => x,
        }
    }
}

impl From<f64> for FeatureValue {
    fn from(value: f64) -> Self {
        FeatureValue::Ratio(value)
    }
}

impl From<u64> for FeatureValue {
    fn from(value: u64) -> Self {
        FeatureValue::Count(value)
    }
}

/// Ordered mapping from feature name to value
///
/// Entries keep insertion order. Inserting an existing name replaces the
/// value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureVector {
    entries: Vec<(String, FeatureValue)>,
    /// Position of each name in `entries`
    index: HashMap<String, usize>,
}

impl FeatureVector {
    /// Create an empty vector
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a feature
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FeatureValue>) {
        let name = name.into();
        let value = value.into();
        match self.index.get(&name) {
            Some(&pos) => self.entries[pos].1 = value,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, value));
            }
        }
    }

    /// Append every feature of `other`, in its order
    pub fn merge(&mut self, other: FeatureVector) {
        self.entries.reserve(other.entries.len());
        self.index.reserve(other.entries.len());
        for (name, value) in other.entries {
            self.insert(name, value);
        }
    }

    /// Look up a feature value
    pub fn get(&self, name: &str) -> Option<FeatureValue> {
        self.index.get(name).map(|&pos| self.entries[pos].1)
    }

    /// Look up a feature as a float
    pub fn value(&self, name: &str) -> Option<f64> {
        self.get(name).map(|v| v.as_f64())
    }

    /// Check whether a feature is present
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Feature names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Entries in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, FeatureValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), *v))
    }

    /// Number of features
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the vector has no features
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
