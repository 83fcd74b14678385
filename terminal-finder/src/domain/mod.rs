//! Domain types for the nearby-terminal finder.
//!
//! Terminal records are read-only inputs to a search. Distance is the
//! only geometry the finder needs.

mod coordinate;
mod terminal;

pub use coordinate::{Coordinate, EARTH_RADIUS_KM, distance_km};
pub use terminal::{RegionKey, RouteReference, TerminalRecord};
