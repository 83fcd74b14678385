//! One lookup from query to ranked results.
//!
//! Resolves the query against the catalog, fetches the chosen origin's
//! connectivity through the injected provider and runs the proximity
//! search. Collaborator failures become outcomes, never errors.

use serde::Serialize;
use tracing::{info, warn};

use crate::catalog::{Candidates, Matcher, SelectError, SubstringMatcher, TerminalCatalog};
use crate::domain::TerminalRecord;
use crate::routes::ConnectivityProvider;

use super::config::SearchConfig;
use super::rank::RankedResult;
use super::search::search;

/// How a lookup ended.
///
/// `NoMatch` and `Empty` are distinct: the first means the query named no
/// usable terminal, the second that the origin has no connected terminal
/// within the radius.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FindOutcome {
    /// No searchable terminal matched the query.
    NoMatch { query: String },

    /// Several terminals matched and none was picked.
    Ambiguous {
        query: String,
        candidates: Vec<TerminalRecord>,
    },

    /// The origin's route information was missing or could not be fetched.
    NoRouteInfo { origin: TerminalRecord },

    /// No connected terminal lies within the radius.
    Empty {
        origin: TerminalRecord,
        radius_km: f64,
    },

    /// Closest connected terminal per region, nearest first.
    Found {
        origin: TerminalRecord,
        radius_km: f64,
        results: Vec<RankedResult>,
    },
}

/// Nearby-terminal finder over one catalog.
pub struct Finder<'a, P, M = SubstringMatcher> {
    catalog: &'a TerminalCatalog,
    provider: &'a P,
    config: &'a SearchConfig,
    matcher: M,
}

impl<'a, P: ConnectivityProvider> Finder<'a, P> {
    /// Create a finder using substring name matching.
    pub fn new(catalog: &'a TerminalCatalog, provider: &'a P, config: &'a SearchConfig) -> Self {
        Self {
            catalog,
            provider,
            config,
            matcher: SubstringMatcher,
        }
    }
}

impl<'a, P: ConnectivityProvider, M: Matcher> Finder<'a, P, M> {
    /// Swap in a different name matcher.
    pub fn with_matcher<N: Matcher>(self, matcher: N) -> Finder<'a, P, N> {
        Finder {
            catalog: self.catalog,
            provider: self.provider,
            config: self.config,
            matcher,
        }
    }

    /// Terminals matching `query` that can start a search.
    pub fn candidates(&self, query: &str) -> Candidates<'a> {
        self.matcher
            .find(self.catalog, query)
            .searchable_origins()
    }

    /// Resolve `query` and search from the result.
    ///
    /// With several candidates, `pick` selects one by index; without a pick
    /// the outcome is [`FindOutcome::Ambiguous`]. A pick that is not a
    /// valid index fails with [`SelectError::OutOfRange`].
    pub async fn find(&self, query: &str, pick: Option<usize>) -> Result<FindOutcome, SelectError> {
        let candidates = self.candidates(query);

        let origin = match (candidates.single(), pick) {
            _ if candidates.is_empty() => {
                return Ok(FindOutcome::NoMatch {
                    query: query.to_string(),
                });
            }
            (_, Some(index)) => candidates.select(index)?,
            (Some(only), None) => only,
            (None, None) => {
                return Ok(FindOutcome::Ambiguous {
                    query: query.to_string(),
                    candidates: candidates.iter().cloned().collect(),
                });
            }
        };

        Ok(self.find_from(origin).await)
    }

    /// Search from an already chosen origin.
    pub async fn find_from(&self, origin: &TerminalRecord) -> FindOutcome {
        let Some(route) = origin.route_reference.as_ref() else {
            warn!(terminal = %origin, "terminal has no route reference");
            return FindOutcome::NoRouteInfo {
                origin: origin.clone(),
            };
        };

        let connectivity = match self.provider.destinations(route).await {
            Ok(set) if !set.is_empty() => set,
            Ok(_) => {
                warn!(terminal = %origin, route = %route, "route page lists no destinations");
                return FindOutcome::NoRouteInfo {
                    origin: origin.clone(),
                };
            }
            Err(e) => {
                warn!(terminal = %origin, route = %route, error = %e, "failed to fetch route info");
                return FindOutcome::NoRouteInfo {
                    origin: origin.clone(),
                };
            }
        };

        let radius_km = self.config.radius_km;
        info!(
            terminal = %origin,
            destinations = connectivity.len(),
            radius_km,
            "searching connected terminals"
        );

        let results = search(self.catalog, origin, &connectivity, radius_km);
        if results.is_empty() {
            FindOutcome::Empty {
                origin: origin.clone(),
                radius_km,
            }
        } else {
            FindOutcome::Found {
                origin: origin.clone(),
                radius_km,
                results,
            }
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
