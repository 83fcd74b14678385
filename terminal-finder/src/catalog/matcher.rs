//! Resolving a free-text query to catalog entries.

use crate::domain::TerminalRecord;

use super::error::SelectError;
use super::table::TerminalCatalog;

/// Strategy for resolving a query string to catalog records.
///
/// Implementations must return matches in catalog order.
pub trait Matcher {
    fn find<'a>(&self, catalog: &'a TerminalCatalog, query: &str) -> Candidates<'a>;
}

/// Linear scan keeping every record whose name contains the query.
///
/// Case-sensitive, no normalization. Adequate for catalogs of a few
/// hundred terminals.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl Matcher for SubstringMatcher {
    fn find<'a>(&self, catalog: &'a TerminalCatalog, query: &str) -> Candidates<'a> {
        catalog
            .iter()
            .filter(|record| record.name.contains(query))
            .collect()
    }
}

/// Records matched by a query, awaiting disambiguation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Candidates<'a> {
    records: Vec<&'a TerminalRecord>,
}

impl<'a> Candidates<'a> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a TerminalRecord> {
        self.records.get(index).copied()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'a TerminalRecord> + '_ {
        self.records.iter().copied()
    }

    /// The only candidate, if there is exactly one.
    pub fn single(&self) -> Option<&'a TerminalRecord> {
        match self.records.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Pick the candidate at `index`.
    pub fn select(&self, index: usize) -> Result<&'a TerminalRecord, SelectError> {
        self.get(index).ok_or(SelectError::OutOfRange {
            index,
            len: self.records.len(),
        })
    }

    /// Keep only records usable as a search origin.
    pub fn searchable_origins(self) -> Self {
        self.records
            .into_iter()
            .filter(|record| record.is_searchable_origin())
            .collect()
    }
}

impl<'a> FromIterator<&'a TerminalRecord> for Candidates<'a> {
    fn from_iter<I: IntoIterator<Item = &'a TerminalRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
