//! In-memory terminal catalog.

use crate::domain::TerminalRecord;

use super::matcher::{Candidates, Matcher, SubstringMatcher};

/// The table of known terminals, in file order.
///
/// A search borrows the catalog immutably. Enrichment steps (geocoding,
/// timetable attachment) mutate it between searches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TerminalCatalog {
    records: Vec<TerminalRecord>,
}

impl TerminalCatalog {
    pub fn new(records: Vec<TerminalRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[TerminalRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TerminalRecord> {
        self.records.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, TerminalRecord> {
        self.records.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records with a resolved coordinate.
    pub fn geocoded_count(&self) -> usize {
        self.records.iter().filter(|r| r.coordinate.is_some()).count()
    }

    /// Number of records with a route reference.
    pub fn routed_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.route_reference.is_some())
            .count()
    }

    /// Every record whose name contains `query` (case-sensitive).
    pub fn find_terminals(&self, query: &str) -> Candidates<'_> {
        SubstringMatcher.find(self, query)
    }
}

impl FromIterator<TerminalRecord> for TerminalCatalog {
    fn from_iter<I: IntoIterator<Item = TerminalRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TerminalCatalog {
    type Item = &'a TerminalRecord;
    type IntoIter = std::slice::Iter<'a, TerminalRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinate, RouteReference};

    fn catalog() -> TerminalCatalog {
        vec![
            TerminalRecord::new("서울특별시", "서초구", "서울고속버스터미널")
                .with_coordinate(Coordinate::new(37.5047, 127.0049))
                .with_route_reference(RouteReference::new("https://x.test/seoul")),
            TerminalRecord::new("부산광역시", "금정구", "부산종합버스터미널")
                .with_coordinate(Coordinate::new(35.2838, 129.0958)),
            TerminalRecord::new("강원특별자치도", "속초시", "속초시외버스터미널"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn counts() {
        let c = catalog();
        assert_eq!(c.len(), 3);
        assert!(!c.is_empty());
        assert_eq!(c.geocoded_count(), 2);
        assert_eq!(c.routed_count(), 1);
        assert!(TerminalCatalog::default().is_empty());
    }

    #[test]
    fn find_terminals_uses_substring_match() {
        let c = catalog();
        let found = c.find_terminals("버스터미널");
        assert_eq!(found.len(), 3);
        assert_eq!(found.get(0).unwrap().name, "서울고속버스터미널");
        assert_eq!(found.get(1).unwrap().name, "부산종합버스터미널");
        assert_eq!(found.get(2).unwrap().name, "속초시외버스터미널");

        let found = c.find_terminals("종합");
        assert_eq!(found.len(), 1);
        assert_eq!(found.get(0).unwrap().name, "부산종합버스터미널");
    }

    #[test]
    fn iter_mut_allows_enrichment() {
        let mut c = catalog();
        for record in c.iter_mut() {
            record.address = "주소".to_string();
        }
        assert!(c.iter().all(|r| r.address == "주소"));
    }
}
