//! Ranking and regional deduplication of search results.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::{RegionKey, TerminalRecord};

/// A terminal that survived filtering, with its distance from the origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult {
    /// Distance from the origin, rounded to one decimal place.
    pub distance_km: f64,
    pub province: String,
    pub city: String,
    pub name: String,
    pub address: String,
}

impl RankedResult {
    /// Build a result for `record` at raw distance `distance_km`.
    pub fn new(record: &TerminalRecord, distance_km: f64) -> Self {
        Self {
            distance_km: round_km(distance_km),
            province: record.province.clone(),
            city: record.city.clone(),
            name: record.name.clone(),
            address: record.address.clone(),
        }
    }

    pub fn region(&self) -> RegionKey<'_> {
        RegionKey {
            province: &self.province,
            city: &self.city,
        }
    }
}

/// Round a distance to one decimal place, as displayed.
///
/// Halves round away from zero, so 0.15 becomes 0.2. Haversine output
/// practically never lands on an exact half, so tie grouping is unaffected.
pub fn round_km(km: f64) -> f64 {
    (km * 10.0).round() / 10.0
}

/// Sort results nearest-first.
///
/// The sort is stable, so results with equal (rounded) distances keep
/// their catalog order.
pub fn rank_by_distance(mut results: Vec<RankedResult>) -> Vec<RankedResult> {
    results.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    results
}

/// Keep only the first result for each (province, city) pair.
///
/// Applied after [`rank_by_distance`] this yields the closest terminal per
/// region.
pub fn dedupe_by_region(results: Vec<RankedResult>) -> Vec<RankedResult> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    results
        .into_iter()
        .filter(|r| seen.insert((r.province.clone(), r.city.clone())))
        .collect()
}
