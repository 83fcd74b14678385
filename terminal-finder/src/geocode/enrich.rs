//! Filling in catalog coordinates from a geocoder.

use std::time::Duration;

use tracing::{info, warn};

use crate::catalog::TerminalCatalog;

use super::client::Geocoder;

/// Counts from one enrichment run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichSummary {
    pub resolved: usize,
    pub missed: usize,
}

/// Geocode every record in `catalog`, replacing its address and coordinate.
///
/// A miss or a failed request leaves the record with an empty address and
/// no coordinate; the run carries on with the next record. Requests are
/// spaced by `interval`.
pub async fn enrich_catalog<G: Geocoder>(
    geocoder: &G,
    catalog: &mut TerminalCatalog,
    interval: Duration,
) -> EnrichSummary {
    let total = catalog.len();
    let mut summary = EnrichSummary::default();

    for (i, record) in catalog.iter_mut().enumerate() {
        let query = record.geocode_query();
        info!("[{}/{}] geocoding {}", i + 1, total, query);

        match geocoder.geocode(&query).await {
            Ok(Some(hit)) => {
                record.address = hit.address;
                record.coordinate = Some(hit.coordinate);
                summary.resolved += 1;
            }
            Ok(None) => {
                warn!(query = %query, "no geocoding result");
                record.address.clear();
                record.coordinate = None;
                summary.missed += 1;
            }
            Err(e) => {
                warn!(query = %query, error = %e, "geocoding failed");
                record.address.clear();
                record.coordinate = None;
                summary.missed += 1;
            }
        }

        if !interval.is_zero() && i + 1 < total {
            tokio::time::sleep(interval).await;
        }
    }

    info!(
        resolved = summary.resolved,
        missed = summary.missed,
        "geocoding complete"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinate, TerminalRecord};
    use crate::geocode::{GeocodeError, GeocodeHit};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Geocoder answering from a fixed table; queries containing "error" fail.
    struct MockGeocoder {
        hits: HashMap<String, GeocodeHit>,
        queries: Mutex<Vec<String>>,
    }

    impl Geocoder for MockGeocoder {
        async fn geocode(&self, query: &str) -> Result<Option<GeocodeHit>, GeocodeError> {
            self.queries.lock().unwrap().push(query.to_string());
            if query.contains("error") {
                return Err(GeocodeError::Api {
                    status: "UNKNOWN_ERROR".into(),
                    message: String::new(),
                });
            }
            Ok(self.hits.get(query).cloned())
        }
    }

    #[tokio::test]
    async fn hits_misses_and_failures() {
        let mut hits = HashMap::new();
        hits.insert(
            "서울특별시 광진구 동서울종합터미널".to_string(),
            GeocodeHit {
                address: "서울 광진구 강변역로 50".to_string(),
                coordinate: Coordinate::new(37.5344, 127.0946),
            },
        );
        let geocoder = MockGeocoder {
            hits,
            queries: Mutex::new(Vec::new()),
        };

        let mut catalog = TerminalCatalog::new(vec![
            TerminalRecord::new("서울특별시", "광진구", "동서울종합터미널"),
            TerminalRecord::new("경기도", "어딘가", "없는터미널")
                .with_address("stale")
                .with_coordinate(Coordinate::new(1.0, 1.0)),
            TerminalRecord::new("경기도", "error", "터미널"),
        ]);

        let summary = enrich_catalog(&geocoder, &mut catalog, Duration::ZERO).await;
        assert_eq!(summary, EnrichSummary { resolved: 1, missed: 2 });

        let records = catalog.records();
        assert_eq!(records[0].address, "서울 광진구 강변역로 50");
        assert_eq!(records[0].coordinate, Some(Coordinate::new(37.5344, 127.0946)));
        assert_eq!(records[1].address, "");
        assert!(records[1].coordinate.is_none());
        assert!(records[2].coordinate.is_none());

        assert_eq!(
            *geocoder.queries.lock().unwrap(),
            vec![
                "서울특별시 광진구 동서울종합터미널",
                "경기도 어딘가 없는터미널",
                "경기도 error 터미널",
            ]
        );
    }
}
