//! Data models for the `snowcast` application
//!
//! Core domain records organized by concern:
//! - Hike: the cached trail record (name, region, coordinates, stats)
//! - Forecast: the daily weather annotation attached during processing
//! - Route: the driving distance/duration annotation

pub mod forecast;
pub mod hike;
pub mod route;

pub use forecast::DailyForecast;
pub use hike::Hike;
pub use route::RouteSummary;

use serde::{Deserialize, Serialize};

/// A hike that survived coordinate, distance, forecast, and route checks,
/// carrying the annotations fetched along the way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub hike: Hike,
    pub forecast: DailyForecast,
    pub route: RouteSummary,
}
