//! Direct-route connectivity.
//!
//! Given a terminal's route reference (its timetable page URL), returns
//! the set of terminal names served directly from it. The finder only
//! sees the [`ConnectivityProvider`] trait; the HTTP client, the offline
//! route file and the session cache all implement it.

mod cache;
mod client;
mod error;
mod fixture;
mod page;
mod provider;

pub use cache::{CacheConfig, CachedConnectivity};
pub use client::{RouteClient, RouteClientConfig};
pub use error::RouteError;
pub use fixture::StaticConnectivity;
pub use page::{BOOKING_HEADING, parse_destinations};
pub use provider::{ConnectivityProvider, ConnectivitySet};
