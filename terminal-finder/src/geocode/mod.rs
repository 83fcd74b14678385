//! Geocoding enrichment for the terminal catalog.
//!
//! Resolves `"{province} {city} {name}"` to an address and coordinate via
//! the Google Geocoding API. The API key is passed in through
//! [`GeocodeConfig`].

mod client;
mod enrich;
mod error;

pub use client::{GeocodeClient, GeocodeConfig, GeocodeHit, Geocoder};
pub use enrich::{EnrichSummary, enrich_catalog};
pub use error::GeocodeError;
