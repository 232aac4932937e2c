//! Cross-household running totals and the year-built cohort averages.

use hearth_schemas::{
    brackets::YearBucket,
    breakdown::Breakdown,
    category::{ApplianceCategory, EnergyCategory},
};
use serde::Serialize;
use std::collections::BTreeMap;

/// Sums per key across every household processed so far.
///
/// Keys are created on first use with a starting value of zero.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateBreakdown<K: Ord> {
    totals: BTreeMap<K, f64>,
}

/// Calibrated kWh summed by appliance category.
pub type ElectricityAggregate = AggregateBreakdown<ApplianceCategory>;

/// BTU summed by appliance category and fuel type.
pub type TotalEnergyAggregate = AggregateBreakdown<EnergyCategory>;

impl<K: Ord> Default for AggregateBreakdown<K> {
    fn default() -> Self {
        Self {
            totals: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Copy> AggregateBreakdown<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: K, value: f64) {
        *self.totals.entry(key).or_insert(0.0) += value;
    }

    /// Adds every entry of a household breakdown, converting keys and
    /// scaling values on the way in.
    pub fn absorb<S, F>(&mut self, breakdown: &Breakdown<S>, scale: f64, key: F)
    where
        S: Ord + Copy,
        F: Fn(S) -> K,
    {
        for (source, value) in breakdown.iter() {
            self.add(key(source), value * scale);
        }
    }

    pub fn get(&self, key: K) -> f64 {
        self.totals.get(&key).copied().unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, f64)> + '_ {
        self.totals.iter().map(|(k, v)| (*k, *v))
    }

    /// Entries with a strictly positive total, the ones worth charting.
    pub fn positive_entries(&self) -> Vec<(K, f64)> {
        self.iter().filter(|(_, value)| *value > 0.0).collect()
    }
}

/// One household's contribution to the year-built chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CohortSample {
    pub bucket: YearBucket,
    pub total_btu: f64,
    pub sq_ft: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CohortAverage {
    pub bucket: YearBucket,
    pub households: usize,
    pub average_btu_millions: f64,
    pub average_sq_ft: f64,
}

/// Groups samples by bucket and averages them. Buckets come back in
/// chronological order; buckets without samples are left out.
pub fn cohort_averages(samples: &[CohortSample]) -> Vec<CohortAverage> {
    let mut groups: BTreeMap<YearBucket, (usize, f64, f64)> = BTreeMap::new();
    for sample in samples {
        let (count, btu, sq_ft) = groups.entry(sample.bucket).or_insert((0, 0.0, 0.0));
        *count += 1;
        *btu += sample.total_btu;
        *sq_ft += sample.sq_ft;
    }

    groups
        .into_iter()
        .map(|(bucket, (count, btu, sq_ft))| {
            let n = count as f64;
            CohortAverage {
                bucket,
                households: count,
                average_btu_millions: btu / n / 1_000_000.0,
                average_sq_ft: sq_ft / n,
            }
        })
        .collect()
}
