//! Route lookup error types.

use crate::domain::RouteReference;

/// Errors that can occur while resolving a terminal's direct destinations.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The timetable page returned a non-success status
    #[error("route page {url} returned status {status}")]
    Status { status: u16, url: String },

    /// The page did not have the expected structure
    #[error("unexpected route page layout: {0}")]
    Layout(String),

    /// No destinations are known for this route reference
    #[error("no route data for {0}")]
    UnknownRoute(RouteReference),

    /// Failed to load an offline route file
    #[error("route file error: {message}")]
    Fixture { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RouteError::Status {
            status: 404,
            url: "https://x.test/a".into(),
        };
        assert_eq!(err.to_string(), "route page https://x.test/a returned status 404");

        let err = RouteError::UnknownRoute(RouteReference::new("https://x.test/b"));
        assert_eq!(err.to_string(), "no route data for https://x.test/b");

        let err = RouteError::Layout("no heading".into());
        assert!(err.to_string().contains("no heading"));
    }
}
