// SPDX-License-Identifier: Apache-2.0

use crate::parameter::ParameterName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Entered values keyed by parameter. A parameter without an entry was not
/// entered; there is no sentinel value for "missing".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Measurements(BTreeMap<ParameterName, f64>);

impl Measurements {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the previous value, if any.
    pub fn set(&mut self, name: ParameterName, value: f64) -> Option<f64> {
        self.0.insert(name, value)
    }

    pub fn clear(&mut self, name: &str) -> Option<f64> {
        self.0.remove(name)
    }

    pub fn clear_all(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ParameterName, f64)> {
        self.0.iter().map(|(k, v)| (k, *v))
    }
}

impl FromIterator<(ParameterName, f64)> for Measurements {
    fn from_iter<I: IntoIterator<Item = (ParameterName, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> ParameterName {
        ParameterName::parse(s).expect("name")
    }

    #[test]
    fn set_replaces_and_reports_previous() {
        let mut m = Measurements::new();
        assert_eq!(m.set(name("TDS"), 100.0), None);
        assert_eq!(m.set(name("TDS"), 250.0), Some(100.0));
        assert_eq!(m.get("TDS"), Some(250.0));
        assert_eq!(m.filled_count(), 1);
    }

    #[test]
    fn zero_is_a_real_value() {
        let m: Measurements = [(name("Odour"), 0.0)].into_iter().collect();
        assert!(m.contains("Odour"));
        assert_eq!(m.get("Odour"), Some(0.0));
        assert_eq!(m.filled_count(), 1);
    }

    #[test]
    fn clear_removes_entry() {
        let mut m: Measurements = [(name("pH"), 7.0)].into_iter().collect();
        assert_eq!(m.clear("pH"), Some(7.0));
        assert!(m.is_empty());
        assert_eq!(m.get("pH"), None);
    }
}
