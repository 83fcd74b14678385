//! File-backed connectivity for offline use and tests.
//!
//! Reads a JSON object mapping route references to destination names:
//!
//! ```json
//! { "https://example.test/dongseoul": ["대전복합터미널", "청주고속터미널"] }
//! ```

use std::collections::HashMap;
use std::path::Path;

use crate::domain::RouteReference;

use super::error::RouteError;
use super::provider::{ConnectivityProvider, ConnectivitySet};

/// Connectivity provider that serves pre-recorded destination lists.
#[derive(Debug, Clone, Default)]
pub struct StaticConnectivity {
    routes: HashMap<RouteReference, ConnectivitySet>,
}

impl StaticConnectivity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the destinations served from `route`, replacing any previous entry.
    pub fn insert(&mut self, route: RouteReference, destinations: ConnectivitySet) {
        self.routes.insert(route, destinations);
    }

    /// Parse the JSON route map.
    pub fn from_json_str(json: &str) -> Result<Self, RouteError> {
        let raw: HashMap<String, Vec<String>> =
            serde_json::from_str(json).map_err(|e| RouteError::Fixture {
                message: e.to_string(),
            })?;

        Ok(Self {
            routes: raw
                .into_iter()
                .map(|(route, names)| (RouteReference::new(route), names.into_iter().collect()))
                .collect(),
        })
    }

    /// Load the JSON route map from a file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RouteError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| RouteError::Fixture {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;
        Self::from_json_str(&json)
    }

    /// Number of routes with recorded destinations.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl ConnectivityProvider for StaticConnectivity {
    async fn destinations(&self, route: &RouteReference) -> Result<ConnectivitySet, RouteError> {
        self.routes
            .get(route)
            .cloned()
            .ok_or_else(|| RouteError::UnknownRoute(route.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const ROUTES: &str = r#"{
        "https://x.test/dongseoul": ["대전복합터미널", "청주고속터미널"],
        "https://x.test/daejeon": []
    }"#;

    #[tokio::test]
    async fn serves_recorded_routes() {
        let provider = StaticConnectivity::from_json_str(ROUTES).unwrap();
        assert_eq!(provider.len(), 2);

        let set = provider
            .destinations(&RouteReference::new("https://x.test/dongseoul"))
            .await
            .unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("청주고속터미널"));

        let empty = provider
            .destinations(&RouteReference::new("https://x.test/daejeon"))
            .await
            .unwrap();
        assert!(empty.is_empty());
    }

    #[tokio::test]
    async fn unknown_route_is_error() {
        let provider = StaticConnectivity::new();
        let result = provider
            .destinations(&RouteReference::new("https://x.test/none"))
            .await;
        assert!(matches!(result, Err(RouteError::UnknownRoute(_))));
    }

    #[test]
    fn invalid_json_is_fixture_error() {
        let err = StaticConnectivity::from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(err, RouteError::Fixture { .. }));
    }

    #[test]
    fn load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("routes.json");
        std::fs::write(&path, ROUTES).unwrap();

        let provider = StaticConnectivity::from_json_file(&path).unwrap();
        assert_eq!(provider.len(), 2);
        assert!(StaticConnectivity::from_json_file(dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn insert_replaces() {
        let mut provider = StaticConnectivity::new();
        let route = RouteReference::new("https://x.test/a");
        provider.insert(route.clone(), ["A"].into_iter().collect());
        provider.insert(route, ["B", "C"].into_iter().collect());
        assert_eq!(provider.len(), 1);
    }
}
