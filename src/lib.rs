//! `snowcast` - Snowshoe hike planning from weather forecasts and drive times
//!
//! This library loads a cached table of snowshoe hikes, checks the weather
//! forecast and traffic-aware driving time for each, and produces a report
//! ranked by cloud cover.

pub mod cli;
pub mod config;
pub mod email;
pub mod error;
pub mod forecast;
pub mod hikes;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod routing;

// Re-export core types for public API
pub use config::RunConfig;
pub use error::SnowcastError;
pub use forecast::{DarkSkyClient, ForecastProvider};
pub use models::{Candidate, DailyForecast, Hike, RouteSummary};
pub use routing::{DirectionsClient, RouteProvider};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, SnowcastError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
