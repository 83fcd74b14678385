//! Search configuration for the nearby-terminal finder.

/// Default search radius in kilometres.
pub const DEFAULT_RADIUS_KM: f64 = 200.0;

/// Configuration parameters for a proximity search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Maximum great-circle distance from the origin (inclusive).
    pub radius_km: f64,
}

impl SearchConfig {
    /// Create a new configuration with the given radius.
    pub fn new(radius_km: f64) -> Self {
        Self { radius_km }
    }

    /// Set a custom radius.
    pub fn with_radius(mut self, radius_km: f64) -> Self {
        self.radius_km = radius_km;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_RADIUS_KM)
    }
}
