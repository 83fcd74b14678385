//! Terminal listing crawl.
//!
//! Reads the public terminal listing to learn each terminal's timetable
//! page, which becomes its route reference in the catalog.

mod attach;
mod client;
mod error;
mod parse;

pub use attach::attach_timetables;
pub use client::{DEFAULT_BASE_URL, DEFAULT_REGIONS, ListingClient, ListingConfig};
pub use error::ListingError;
pub use parse::{ListedTerminal, absolute_url, parse_listing};
