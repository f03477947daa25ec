//! Google Directions client
//!
//! Fetches traffic-aware drive time and distance between the departure
//! point and a trailhead. A response without a usable route yields an
//! all-`None` summary; downstream filtering drops those hikes.

use crate::error::SnowcastError;
use crate::models::RouteSummary;
use crate::Result;
use serde::Deserialize;
use std::env;
use std::time::Duration;

const DIRECTIONS_BASE: &str = "https://maps.googleapis.com/maps/api/directions/json";

const METERS_TO_MILES: f64 = 0.000_621_371;

/// Source of drive summaries, implemented by the Google Directions client
/// and by in-memory fakes in pipeline tests.
pub trait RouteProvider {
    /// Traffic-aware drive summary from `origin` to `destination`,
    /// leaving at the unix timestamp `depart_time`.
    fn route(
        &self,
        origin: (f64, f64),
        destination: (f64, f64),
        depart_time: i64,
    ) -> Result<RouteSummary>;
}

/// Blocking Google Directions API client
pub struct DirectionsClient {
    http: reqwest::blocking::Client,
    api_key: String,
}

impl DirectionsClient {
    /// Create a client with an explicit API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| SnowcastError::route(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            api_key: api_key.into(),
        })
    }

    /// Create a client keyed from the `GOOGLE_MAPS_DIRECTIONS_API_KEY`
    /// environment variable.
    pub fn from_env() -> Result<Self> {
        Self::new(env::var("GOOGLE_MAPS_DIRECTIONS_API_KEY").unwrap_or_default())
    }
}

impl RouteProvider for DirectionsClient {
    fn route(
        &self,
        origin: (f64, f64),
        destination: (f64, f64),
        depart_time: i64,
    ) -> Result<RouteSummary> {
        let response: DirectionsResponse = self
            .http
            .get(DIRECTIONS_BASE)
            .query(&[
                ("origin", format!("{},{}", origin.0, origin.1)),
                ("destination", format!("{},{}", destination.0, destination.1)),
                ("units", "imperial".to_string()),
                ("departure_time", depart_time.to_string()),
                ("traffic_model", "best_guess".to_string()),
                ("key", self.api_key.clone()),
            ])
            .send()
            .and_then(|r| r.json())
            .map_err(|e| SnowcastError::route(format!("directions request failed: {e}")))?;

        Ok(summarize(&response, destination))
    }
}

/// Extract the first leg of the first route; an incomplete response
/// becomes an all-`None` summary rather than an error.
fn summarize(response: &DirectionsResponse, destination: (f64, f64)) -> RouteSummary {
    let leg = response
        .routes
        .first()
        .and_then(|route| route.legs.first());

    let (Some(distance), Some(duration_in_traffic)) = (
        leg.and_then(|leg| leg.distance.as_ref()),
        leg.and_then(|leg| leg.duration_in_traffic.as_ref()),
    ) else {
        tracing::debug!(
            "no usable route to {},{} in directions response",
            destination.0,
            destination.1
        );
        return RouteSummary::default();
    };

    RouteSummary {
        distance_miles: Some(distance.value as f64 * METERS_TO_MILES),
        duration: Some(format_hms(duration_in_traffic.value)),
        duration_seconds: Some(duration_in_traffic.value),
    }
}

/// Format seconds as zero-padded `HH:MM:SS`.
#[must_use]
pub fn format_hms(seconds: i64) -> String {
    let (hours, remainder) = (seconds / 3600, seconds % 3600);
    let (minutes, seconds) = (remainder / 60, remainder % 60);
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    #[serde(default)]
    routes: Vec<Route>,
}

#[derive(Debug, Deserialize)]
struct Route {
    #[serde(default)]
    legs: Vec<Leg>,
}

#[derive(Debug, Deserialize)]
struct Leg {
    distance: Option<ValueField>,
    duration_in_traffic: Option<ValueField>,
}

/// Google wraps scalars as `{"text": ..., "value": ...}`; only the raw
/// value is needed here.
#[derive(Debug, Deserialize)]
struct ValueField {
    value: i64,
}
