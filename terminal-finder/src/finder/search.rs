//! Proximity filter and ranker.
//!
//! Pure computation over an already-loaded catalog and connectivity set:
//! no I/O, no errors, same output for the same inputs.

use tracing::debug;

use crate::catalog::TerminalCatalog;
use crate::domain::{TerminalRecord, distance_km};
use crate::routes::ConnectivitySet;

use super::rank::{RankedResult, dedupe_by_region, rank_by_distance};

/// Find connected terminals within `radius_km` of `origin`, nearest first,
/// keeping the closest one per (province, city).
///
/// A candidate is kept when it:
/// 1. is not the origin itself (same name and same coordinate),
/// 2. is named in `connectivity`,
/// 3. has a coordinate,
/// 4. lies at most `radius_km` from the origin.
///
/// The origin must have a coordinate; an origin without one matches
/// nothing.
pub fn search(
    catalog: &TerminalCatalog,
    origin: &TerminalRecord,
    connectivity: &ConnectivitySet,
    radius_km: f64,
) -> Vec<RankedResult> {
    let Some(origin_coordinate) = origin.coordinate else {
        debug!(terminal = %origin, "origin has no coordinate");
        return Vec::new();
    };

    let within_radius: Vec<RankedResult> = catalog
        .iter()
        .filter(|candidate| !candidate.is_same_terminal(origin))
        .filter(|candidate| connectivity.contains(&candidate.name))
        .filter_map(|candidate| {
            let distance = distance_km(origin_coordinate, candidate.coordinate?);
            (distance <= radius_km).then(|| RankedResult::new(candidate, distance))
        })
        .collect();

    let candidates = within_radius.len();
    let results = dedupe_by_region(rank_by_distance(within_radius));

    debug!(
        terminal = %origin,
        connected = connectivity.len(),
        candidates,
        regions = results.len(),
        "proximity search complete"
    );

    results
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::Coordinate;
    use proptest::prelude::*;
    use std::collections::HashSet;

    const NAMES: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

    fn arb_record() -> impl Strategy<Value = TerminalRecord> {
        (
            0usize..NAMES.len(),
            0usize..2,
            0usize..3,
            prop::option::weighted(0.9, (33.0f64..38.5, 126.0f64..129.5)),
        )
            .prop_map(|(n, p, c, coord)| {
                let mut record = TerminalRecord::new(format!("P{p}"), format!("C{c}"), NAMES[n]);
                record.coordinate = coord.map(|(lat, lng)| Coordinate::new(lat, lng));
                record
            })
    }

    fn arb_case() -> impl Strategy<Value = (Vec<TerminalRecord>, usize, Vec<bool>, f64)> {
        prop::collection::vec(arb_record(), 1..25).prop_flat_map(|records| {
            let len = records.len();
            (
                Just(records),
                0..len,
                prop::collection::vec(any::<bool>(), NAMES.len()),
                0.0f64..400.0,
            )
        })
    }

    fn setup(
        records: Vec<TerminalRecord>,
        origin_idx: usize,
        mask: &[bool],
    ) -> (TerminalCatalog, TerminalRecord, ConnectivitySet) {
        let mut origin = records[origin_idx].clone();
        origin.coordinate.get_or_insert(Coordinate::new(36.0, 127.5));
        let mut records = records;
        records[origin_idx] = origin.clone();

        let connectivity = NAMES
            .iter()
            .zip(mask)
            .filter(|(_, on)| **on)
            .map(|(name, _)| *name)
            .collect();

        (TerminalCatalog::new(records), origin, connectivity)
    }

    proptest! {
        /// Results are ordered by non-decreasing distance
        #[test]
        fn monotonic((records, idx, mask, radius) in arb_case()) {
            let (catalog, origin, set) = setup(records, idx, &mask);
            let results = search(&catalog, &origin, &set, radius);
            for pair in results.windows(2) {
                prop_assert!(pair[0].distance_km <= pair[1].distance_km);
            }
        }

        /// Every result is connected, within radius and not the origin
        #[test]
        fn results_are_eligible((records, idx, mask, radius) in arb_case()) {
            let (catalog, origin, set) = setup(records, idx, &mask);
            for r in search(&catalog, &origin, &set, radius) {
                prop_assert!(set.contains(&r.name));
                prop_assert!(r.distance_km <= (radius * 10.0).round() / 10.0 + 0.05);
            }
        }

        /// Each region appears once, at the minimum distance over all eligible
        /// candidates of that region
        #[test]
        fn dedup_keeps_closest((records, idx, mask, radius) in arb_case()) {
            let (catalog, origin, set) = setup(records, idx, &mask);
            let results = search(&catalog, &origin, &set, radius);
            let origin_coordinate = origin.coordinate.unwrap();

            let mut seen = HashSet::new();
            for r in &results {
                prop_assert!(seen.insert(r.region()));

                let min = catalog
                    .iter()
                    .filter(|c| !c.is_same_terminal(&origin))
                    .filter(|c| set.contains(&c.name))
                    .filter(|c| c.region() == r.region())
                    .filter_map(|c| c.coordinate)
                    .map(|c| distance_km(origin_coordinate, c))
                    .filter(|d| *d <= radius)
                    .map(crate::finder::round_km)
                    .fold(f64::INFINITY, f64::min);
                prop_assert_eq!(r.distance_km, min);
            }
        }
    }
}
