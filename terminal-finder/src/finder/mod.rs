//! Nearby-terminal search.
//!
//! Given an origin terminal, the set of terminals it serves directly and a
//! radius, finds the closest connected terminal in each (province, city)
//! and ranks them by distance. [`Finder`] wraps the whole lookup: query
//! matching, connectivity fetch and search.

mod config;
mod rank;
mod search;
mod session;

pub use config::{DEFAULT_RADIUS_KM, SearchConfig};
pub use rank::{RankedResult, dedupe_by_region, rank_by_distance, round_km};
pub use search::search;
pub use session::{FindOutcome, Finder};
