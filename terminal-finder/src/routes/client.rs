//! HTTP client for terminal timetable pages.

use tracing::debug;

use crate::domain::RouteReference;

use super::error::RouteError;
use super::page::parse_destinations;
use super::provider::{ConnectivityProvider, ConnectivitySet};

const DEFAULT_USER_AGENT: &str = concat!("terminal-finder/", env!("CARGO_PKG_VERSION"));

/// Configuration for the timetable page client.
#[derive(Debug, Clone)]
pub struct RouteClientConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User-Agent header sent with each request
    pub user_agent: String,
}

impl RouteClientConfig {
    pub fn new() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for RouteClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetches timetable pages and extracts the directly served destinations.
#[derive(Debug, Clone)]
pub struct RouteClient {
    http: reqwest::Client,
}

impl RouteClient {
    pub fn new(config: RouteClientConfig) -> Result<Self, RouteError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http })
    }

    /// Fetch the raw HTML of a timetable page.
    pub async fn fetch_page(&self, route: &RouteReference) -> Result<String, RouteError> {
        let response = self.http.get(route.as_str()).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(RouteError::Status {
                status: status.as_u16(),
                url: route.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

impl ConnectivityProvider for RouteClient {
    async fn destinations(&self, route: &RouteReference) -> Result<ConnectivitySet, RouteError> {
        let html = self.fetch_page(route).await?;
        let names = parse_destinations(&html)?;
        debug!(route = %route, destinations = names.len(), "parsed timetable page");
        Ok(names.into_iter().collect())
    }
}
