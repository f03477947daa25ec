//! Hike record model, mirroring the cache file columns

use serde::{Deserialize, Serialize};

/// One snowshoe hike as loaded from the cache file or scraped from a
/// trail page. Descriptive fields stay string-typed exactly as cached;
/// coordinates are `None` when the source page had no trailhead map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hike {
    /// Elevation gain in feet, as displayed on the trail page
    pub height_gain: String,
    /// Trailhead latitude in decimal degrees
    pub lat: Option<f64>,
    /// Round-trip length, e.g. "7.0 miles, roundtrip"
    pub length: String,
    /// Trailhead longitude in decimal degrees
    pub lon: Option<f64>,
    /// Trail name
    pub name: String,
    /// Star rating out of five
    pub rating: String,
    /// Region, e.g. "Snoqualmie Region"
    pub region: String,
    /// Source page URL
    pub url: String,
}

impl Hike {
    /// Coordinates as a pair, or `None` when either is missing.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}
