//! Terminal records as held by the catalog.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Opaque handle used to fetch a terminal's directly served destinations.
///
/// In practice this is the URL of the terminal's timetable page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteReference(String);

impl RouteReference {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The administrative sub-region a terminal belongs to.
///
/// Results are collapsed to one terminal per region key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionKey<'a> {
    pub province: &'a str,
    pub city: &'a str,
}

/// One physical bus terminal.
///
/// `name` is unique within a province and city, but two provinces may
/// host terminals with the same name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminalRecord {
    pub province: String,
    pub city: String,
    pub name: String,
    pub address: String,
    /// Absent when geocoding did not resolve the terminal.
    pub coordinate: Option<Coordinate>,
    /// Absent when no timetable page is known.
    pub route_reference: Option<RouteReference>,
}

impl TerminalRecord {
    /// Create a record with no address, coordinate or route reference.
    pub fn new(
        province: impl Into<String>,
        city: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            province: province.into(),
            city: city.into(),
            name: name.into(),
            address: String::new(),
            coordinate: None,
            route_reference: None,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_coordinate(mut self, coordinate: Coordinate) -> Self {
        self.coordinate = Some(coordinate);
        self
    }

    pub fn with_route_reference(mut self, reference: RouteReference) -> Self {
        self.route_reference = Some(reference);
        self
    }

    /// The (province, city) pair used for per-region deduplication.
    pub fn region(&self) -> RegionKey<'_> {
        RegionKey {
            province: &self.province,
            city: &self.city,
        }
    }

    /// Whether this record can start a search: it needs both a coordinate
    /// and a route reference.
    pub fn is_searchable_origin(&self) -> bool {
        self.coordinate.is_some() && self.route_reference.is_some()
    }

    /// Whether `other` denotes the same physical terminal.
    ///
    /// Names alone are not enough since they repeat across provinces, so
    /// the coordinate must match as well.
    pub fn is_same_terminal(&self, other: &TerminalRecord) -> bool {
        self.name == other.name && self.coordinate == other.coordinate
    }

    /// Query string sent to the geocoder for this record.
    pub fn geocode_query(&self) -> String {
        format!("{} {} {}", self.province, self.city, self.name)
    }
}

impl fmt::Display for TerminalRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.province, self.city, self.name)
    }
}
