//! Geographic coordinates and great-circle distance.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Mean Earth radius used by the haversine formula, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in decimal degrees.
///
/// Values come from geocoding and are not range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Create a coordinate from latitude and longitude in degrees.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to `other` in kilometres.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        distance_km(*self, *other)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}

/// Great-circle distance between two coordinates in kilometres (haversine).
///
/// # Examples
///
/// ```
/// use terminal_finder::domain::{Coordinate, distance_km};
///
/// let seoul = Coordinate::new(37.5547, 126.9707);
/// let busan = Coordinate::new(35.1796, 129.0756);
///
/// let d = distance_km(seoul, busan);
/// assert!((d - 325.0).abs() < 2.0);
/// assert_eq!(distance_km(seoul, seoul), 0.0);
/// ```
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlng = (b.lng - a.lng).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);

    // Rounding can push h a hair above 1 for antipodal points
    EARTH_RADIUS_KM * 2.0 * h.min(1.0).sqrt().asin()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn coordinate() -> impl Strategy<Value = Coordinate> {
        (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lng)| Coordinate::new(lat, lng))
    }

    proptest! {
        /// Distance does not depend on argument order
        #[test]
        fn symmetric(a in coordinate(), b in coordinate()) {
            let ab = distance_km(a, b);
            let ba = distance_km(b, a);
            prop_assert_eq!(ab, ba);
        }

        /// A point is at distance zero from itself
        #[test]
        fn zero_to_self(a in coordinate()) {
            prop_assert_eq!(distance_km(a, a), 0.0);
        }

        /// Distances are finite, non-negative and bounded by half the circumference
        #[test]
        fn bounded(a in coordinate(), b in coordinate()) {
            let d = distance_km(a, b);
            prop_assert!(d >= 0.0);
            prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS_KM + 1e-6);
        }
    }
}
