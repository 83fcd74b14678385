//! Google Geocoding API client.

use std::time::Duration;

use serde::Deserialize;

use crate::domain::Coordinate;

use super::error::GeocodeError;

/// Default endpoint of the Google Geocoding API.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Configuration for the geocoding client.
#[derive(Debug, Clone)]
pub struct GeocodeConfig {
    /// API key sent as the `key` query parameter
    pub api_key: String,
    /// Endpoint URL
    pub base_url: String,
    /// Language of returned addresses
    pub language: String,
    /// Pause between consecutive requests during enrichment
    pub request_interval: Duration,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeocodeConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            language: "ko".to_string(),
            request_interval: Duration::from_millis(100),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_request_interval(mut self, interval: Duration) -> Self {
        self.request_interval = interval;
        self
    }
}

/// A resolved address and its coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeHit {
    pub address: String,
    pub coordinate: Coordinate,
}

/// Resolves a free-text place query to a coordinate.
// Enrichment is sequential on one task, so no `Send` bound is needed.
#[allow(async_fn_in_trait)]
pub trait Geocoder {
    /// `Ok(None)` means the service found nothing for `query`.
    async fn geocode(&self, query: &str) -> Result<Option<GeocodeHit>, GeocodeError>;
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    formatted_address: String,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Location,
}

#[derive(Debug, Deserialize)]
struct Location {
    lat: f64,
    lng: f64,
}

/// Turn a decoded response into a hit, a miss or an error.
fn interpret(response: GeocodeResponse) -> Result<Option<GeocodeHit>, GeocodeError> {
    match response.status.as_str() {
        "OK" => Ok(response.results.into_iter().next().map(|r| GeocodeHit {
            address: r.formatted_address,
            coordinate: Coordinate::new(r.geometry.location.lat, r.geometry.location.lng),
        })),
        "ZERO_RESULTS" => Ok(None),
        _ => Err(GeocodeError::Api {
            status: response.status,
            message: response.error_message.unwrap_or_default(),
        }),
    }
}

/// Client for the Google Geocoding API.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: reqwest::Client,
    config: GeocodeConfig,
}

impl GeocodeClient {
    /// Create a new geocoding client. Fails without an API key.
    pub fn new(config: GeocodeConfig) -> Result<Self, GeocodeError> {
        if config.api_key.is_empty() {
            return Err(GeocodeError::MissingApiKey);
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }
}

impl Geocoder for GeocodeClient {
    async fn geocode(&self, query: &str) -> Result<Option<GeocodeHit>, GeocodeError> {
        let response = self
            .http
            .get(&self.config.base_url)
            .query(&[
                ("address", query),
                ("key", self.config.api_key.as_str()),
                ("language", self.config.language.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Api {
                status: status.as_u16().to_string(),
                message: body,
            });
        }

        let body = response.text().await?;
        let decoded: GeocodeResponse =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Json {
                message: e.to_string(),
            })?;

        interpret(decoded)
    }
}
