//! Driving route annotation

use serde::{Deserialize, Serialize};

/// Drive summary for one hike, attached after the directions fetch.
/// All fields are `None` when the directions API returned no usable
/// route; callers treat a missing distance as "exclude this hike".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteSummary {
    /// Driving distance in miles
    pub distance_miles: Option<f64>,
    /// Drive time formatted as zero-padded HH:MM:SS
    pub duration: Option<String>,
    /// Drive time in seconds, traffic-aware
    pub duration_seconds: Option<i64>,
}

impl RouteSummary {
    /// Whether the directions API produced a usable route.
    #[must_use]
    pub fn is_routable(&self) -> bool {
        self.distance_miles.is_some()
    }
}
