//! The connectivity capability consumed by the finder.

use std::collections::HashSet;

use crate::domain::RouteReference;

use super::error::RouteError;

/// Names of terminals reachable from an origin by one published route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectivitySet(HashSet<String>);

impl ConnectivitySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.0.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ConnectivitySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Source of direct destinations for a route reference.
///
/// This abstraction keeps the finder free of network access and lets it
/// be tested with fixed connectivity sets.
// Searches await providers on the calling task, so no `Send` bound is needed.
#[allow(async_fn_in_trait)]
pub trait ConnectivityProvider {
    /// Names of terminals served directly from the terminal behind `route`.
    async fn destinations(&self, route: &RouteReference) -> Result<ConnectivitySet, RouteError>;
}
