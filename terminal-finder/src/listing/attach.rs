//! Attaching crawled timetable links to catalog records.

use std::collections::HashMap;

use crate::catalog::TerminalCatalog;
use crate::domain::RouteReference;

use super::parse::ListedTerminal;

/// Set each record's route reference from the listing, matching by name.
///
/// When a name is listed more than once the last entry wins. Records not
/// on the listing lose their route reference. Returns how many records
/// end up with one.
pub fn attach_timetables(catalog: &mut TerminalCatalog, listed: &[ListedTerminal]) -> usize {
    let urls: HashMap<&str, Option<&str>> = listed
        .iter()
        .map(|t| (t.name.as_str(), t.timetable_url.as_deref()))
        .collect();

    for record in catalog.iter_mut() {
        record.route_reference = urls
            .get(record.name.as_str())
            .copied()
            .flatten()
            .map(RouteReference::new);
    }

    catalog.routed_count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TerminalRecord;

    fn listed(name: &str, url: Option<&str>) -> ListedTerminal {
        ListedTerminal {
            region: "r".to_string(),
            name: name.to_string(),
            timetable_url: url.map(str::to_string),
        }
    }

    #[test]
    fn attaches_by_name() {
        let mut catalog = TerminalCatalog::new(vec![
            TerminalRecord::new("서울특별시", "광진구", "동서울종합터미널"),
            TerminalRecord::new("경기도", "수원시", "수원버스터미널")
                .with_route_reference(RouteReference::new("https://old.test")),
            TerminalRecord::new("충청북도", "청주시", "청주고속터미널"),
        ]);

        let count = attach_timetables(
            &mut catalog,
            &[
                listed("동서울종합터미널", Some("https://x.test/1")),
                listed("청주고속터미널", None),
            ],
        );

        assert_eq!(count, 1);
        let records = catalog.records();
        assert_eq!(
            records[0].route_reference,
            Some(RouteReference::new("https://x.test/1"))
        );
        assert!(records[1].route_reference.is_none());
        assert!(records[2].route_reference.is_none());
    }

    #[test]
    fn last_listing_wins() {
        let mut catalog =
            TerminalCatalog::new(vec![TerminalRecord::new("P", "C", "중앙터미널")]);

        attach_timetables(
            &mut catalog,
            &[
                listed("중앙터미널", Some("https://x.test/first")),
                listed("중앙터미널", Some("https://x.test/second")),
            ],
        );

        assert_eq!(
            catalog.records()[0].route_reference,
            Some(RouteReference::new("https://x.test/second"))
        );
    }
}
