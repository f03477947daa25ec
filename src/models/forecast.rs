//! Daily weather forecast annotation

use serde::{Deserialize, Serialize};

/// Cloud cover sentinel used when the weather API is unreachable.
/// Full cover sorts the hike to the bottom of the report instead of
/// dropping it silently.
pub const CLOUD_COVER_WORST_CASE: f64 = 1.0;

/// Weather summary for one hike on one day, attached after the forecast
/// fetch succeeds (or degrades).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyForecast {
    /// Human-readable date, e.g. "Sat, Jan 18, 2020"
    pub date_for: String,
    /// Unix timestamp of the forecast day's start (local midnight)
    pub timestamp: i64,
    /// Multi-line forecast paragraph for the report body
    pub text: String,
    /// Fraction of sky obscured, 0.0 (clear) to 1.0 (overcast)
    pub cloud_cover: f64,
}

impl DailyForecast {
    /// Degraded record substituted when the weather API cannot be reached.
    #[must_use]
    pub fn degraded() -> Self {
        Self {
            date_for: String::new(),
            timestamp: 0,
            text: String::new(),
            cloud_cover: CLOUD_COVER_WORST_CASE,
        }
    }

    /// Whether this record is the degraded fallback rather than real data.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.timestamp == 0 && self.text.is_empty()
    }
}
