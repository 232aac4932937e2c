use crate::category::{ApplianceCategory, FuelType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Annual energy per category for one household.
///
/// A category that did not pass its presence gate is absent, which is
/// different from being present with a value of zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Breakdown<K: Ord> {
    entries: BTreeMap<K, f64>,
}

/// kWh per year by appliance category.
pub type ElectricityBreakdown = Breakdown<ApplianceCategory>;

/// BTU per year by fuel type.
pub type FuelBreakdown = Breakdown<FuelType>;

impl<K: Ord> Default for Breakdown<K> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Copy> Breakdown<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: K, value: f64) {
        self.entries.insert(key, value);
    }

    pub fn get(&self, key: K) -> Option<f64> {
        self.entries.get(&key).copied()
    }

    pub fn contains(&self, key: K) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all entries, without rounding.
    pub fn total(&self) -> f64 {
        self.entries.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, f64)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, *v))
    }

    /// A new breakdown with the same keys and every value passed through `f`.
    pub fn map_values<F: Fn(f64) -> f64>(&self, f: F) -> Self {
        Self {
            entries: self.entries.iter().map(|(k, v)| (*k, f(*v))).collect(),
        }
    }
}

impl<K: Ord + Copy> FromIterator<(K, f64)> for Breakdown<K> {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
