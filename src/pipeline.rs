//! Filter/rank pipeline
//!
//! Linear per-hike pass: coordinate check, straight-line pre-filter,
//! forecast fetch, departure-time calculation, route fetch. Survivors are
//! filtered to the drive-time cutoff and ranked by cloud cover. One
//! hike's failure never aborts the batch.

use crate::config::RunConfig;
use crate::forecast::ForecastProvider;
use crate::models::{Candidate, Hike};
use crate::routing::RouteProvider;
use chrono::Utc;
use haversine::{distance, Location, Units};
use tracing::{debug, info, warn};

/// Seconds ahead of "now" to request directions for when the run asks
/// for results right now; the directions API rejects departures in the
/// past.
const IMMEDIATE_DEPARTURE_SLACK_SECS: i64 = 5 * 60;

/// Run the full pipeline over `hikes`, returning report candidates
/// sorted by cloud cover (clearest first).
pub fn plan(
    config: &RunConfig,
    hikes: Vec<Hike>,
    forecasts: &impl ForecastProvider,
    routes: &impl RouteProvider,
) -> Vec<Candidate> {
    let cutoff_miles = config.distance_cutoff_miles();
    let day_offset = usize::try_from(config.num_days_past_today).unwrap_or(0);
    let mut candidates = Vec::new();

    for hike in hikes {
        let Some((lat, lon)) = hike.coordinates() else {
            debug!("{} has no trailhead coordinates, skipping", hike.name);
            continue;
        };

        let miles = straight_line_miles((config.depart_lat, config.depart_lon), (lat, lon));
        if miles >= cutoff_miles {
            debug!("{}: distance is too far - {miles:.1} miles", hike.name);
            continue;
        }

        let forecast = match forecasts.daily_forecast(lat, lon, day_offset) {
            Ok(forecast) => forecast,
            Err(e) => {
                warn!("error getting forecast for {}, skipping: {e}", hike.name);
                continue;
            }
        };

        let depart_time = departure_time(config, forecast.timestamp);
        let route = match routes.route(
            (config.depart_lat, config.depart_lon),
            (lat, lon),
            depart_time,
        ) {
            Ok(route) => route,
            Err(e) => {
                warn!("error getting travel info for {}, skipping: {e}", hike.name);
                continue;
            }
        };

        if route.is_routable() {
            candidates.push(Candidate {
                hike,
                forecast,
                route,
            });
        }
    }

    info!("found {} hike candidates", candidates.len());
    filter_and_rank(candidates, config)
}

/// Straight-line haversine distance in miles.
#[must_use]
pub fn straight_line_miles(from: (f64, f64), to: (f64, f64)) -> f64 {
    distance(
        Location {
            latitude: from.0,
            longitude: from.1,
        },
        Location {
            latitude: to.0,
            longitude: to.1,
        },
        Units::Miles,
    )
}

/// Departure timestamp for the route request.
#[must_use]
pub fn departure_time(config: &RunConfig, forecast_timestamp: i64) -> i64 {
    departure_time_at(config, forecast_timestamp, Utc::now().timestamp())
}

/// As [`departure_time`], with the clock injected. Asking for results
/// right now (both offsets zero) departs shortly after `now` instead of
/// at the forecast day's offset.
#[must_use]
pub fn departure_time_at(config: &RunConfig, forecast_timestamp: i64, now: i64) -> i64 {
    if config.num_days_past_today == 0 && config.num_hours_past_midnight_to_leave == 0 {
        now + IMMEDIATE_DEPARTURE_SLACK_SECS
    } else {
        forecast_timestamp + 3600 * config.num_hours_past_midnight_to_leave
    }
}

/// Keep candidates within the drive-time cutoff and sort ascending by
/// cloud cover. The sort is stable, so ties keep collection order.
fn filter_and_rank(mut candidates: Vec<Candidate>, config: &RunConfig) -> Vec<Candidate> {
    let cutoff_seconds = config.duration_cutoff_seconds();
    candidates.retain(|candidate| {
        candidate
            .route
            .duration_seconds
            .is_some_and(|seconds| seconds <= cutoff_seconds)
    });
    candidates.sort_by(|a, b| {
        a.forecast
            .cloud_cover
            .partial_cmp(&b.forecast.cloud_cover)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    candidates
}
