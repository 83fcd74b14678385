//! Listing crawl error types.

/// Errors that can occur while crawling the terminal listing.
#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The listing page returned a non-success status
    #[error("listing page {url} returned status {status}")]
    Status { status: u16, url: String },

    /// A CSS selector could not be built
    #[error("invalid selector: {0}")]
    Selector(String),
}
