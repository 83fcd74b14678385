//! HTTP client for the terminal listing page.

use tracing::{debug, info};

use super::error::ListingError;
use super::parse::{ListedTerminal, parse_listing};

/// Default site hosting the listing and timetable pages.
pub const DEFAULT_BASE_URL: &str = "https://transportation.asamaru.net/";

/// Path of the intercity bus terminal listing, relative to the base URL.
const DEFAULT_LISTING_PATH: &str = "시외버스/터미널";

/// Region slugs used as section anchors on the listing page.
pub const DEFAULT_REGIONS: [&str; 17] = [
    "seoulteugbyeolsi",
    "kyeongkido",
    "incheonkwangyeogsi",
    "daejeonkwangyeogsi",
    "daekukwangyeogsi",
    "ulsankwangyeogsi",
    "busankwangyeogsi",
    "kwangjukwangyeogsi",
    "sejongteugbyeoljachisi",
    "kangwonteugbyeoljachido",
    "chungcheongbugdo",
    "chungcheongnamdo",
    "kyeongsangbugdo",
    "kyeongsangnamdo",
    "jeonbugteugbyeoljachido",
    "jeonlanamdo",
    "jejuteugbyeoljachido",
];

/// Configuration for the listing crawler.
#[derive(Debug, Clone)]
pub struct ListingConfig {
    /// Site root; relative timetable links resolve against it
    pub base_url: String,
    /// Listing page path relative to `base_url`
    pub listing_path: String,
    /// Region sections to read
    pub regions: Vec<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ListingConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            listing_path: DEFAULT_LISTING_PATH.to_string(),
            regions: DEFAULT_REGIONS.iter().map(|r| r.to_string()).collect(),
            timeout_secs: 30,
        }
    }

    /// Restrict the crawl to the given region slugs.
    pub fn with_regions<I, S>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.regions = regions.into_iter().map(Into::into).collect();
        self
    }

    /// Full URL of the listing page.
    pub fn listing_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.listing_path.trim_start_matches('/')
        )
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Crawls the listing page for terminal names and timetable links.
#[derive(Debug, Clone)]
pub struct ListingClient {
    http: reqwest::Client,
    config: ListingConfig,
}

impl ListingClient {
    pub fn new(config: ListingConfig) -> Result<Self, ListingError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    /// Fetch and parse the listing page.
    pub async fn fetch(&self) -> Result<Vec<ListedTerminal>, ListingError> {
        let url = self.config.listing_url();
        debug!(url = %url, "fetching terminal listing");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ListingError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let html = response.text().await?;
        let terminals = parse_listing(&html, &self.config.base_url, &self.config.regions)?;

        for region in &self.config.regions {
            let count = terminals.iter().filter(|t| &t.region == region).count();
            debug!(region = %region, terminals = count, "parsed listing region");
        }
        info!(terminals = terminals.len(), "crawled terminal listing");

        Ok(terminals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = ListingConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.regions.len(), 17);
        assert_eq!(
            config.listing_url(),
            "https://transportation.asamaru.net/시외버스/터미널"
        );
    }

    #[test]
    fn config_with_regions() {
        let config = ListingConfig::new("http://localhost:8080").with_regions(["kyeongkido"]);
        assert_eq!(config.regions, vec!["kyeongkido".to_string()]);
        assert_eq!(config.listing_url(), "http://localhost:8080/시외버스/터미널");
    }
}
