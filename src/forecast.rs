//! Dark Sky forecast client
//!
//! Fetches the daily forecast for a trailhead and renders the report
//! paragraph. A transport or decode failure degrades to a worst-case
//! record instead of failing the run; a response without the requested
//! day is an error the pipeline handles per hike.

use crate::error::SnowcastError;
use crate::models::DailyForecast;
use crate::Result;
use chrono::{Local, TimeZone};
use std::env;
use std::time::Duration;

const DARK_SKY_FORECAST_BASE: &str = "https://api.darksky.net/forecast";

/// Source of daily forecasts, implemented by the Dark Sky client and by
/// in-memory fakes in pipeline tests.
pub trait ForecastProvider {
    /// Forecast for the day `day_offset` days past today at the given
    /// coordinates.
    fn daily_forecast(&self, lat: f64, lon: f64, day_offset: usize) -> Result<DailyForecast>;
}

/// Blocking Dark Sky API client
pub struct DarkSkyClient {
    http: reqwest::blocking::Client,
    api_key: String,
}

impl DarkSkyClient {
    /// Create a client with an explicit API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| SnowcastError::forecast(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            api_key: api_key.into(),
        })
    }

    /// Create a client keyed from the `DARK_SKY_API_KEY` environment
    /// variable. An unset key is tolerated; requests will then degrade.
    pub fn from_env() -> Result<Self> {
        Self::new(env::var("DARK_SKY_API_KEY").unwrap_or_default())
    }

    fn fetch(&self, lat: f64, lon: f64) -> reqwest::Result<darksky::ForecastResponse> {
        let url = format!("{DARK_SKY_FORECAST_BASE}/{}/{lat},{lon}", self.api_key);
        self.http.get(url).send()?.json()
    }
}

impl ForecastProvider for DarkSkyClient {
    fn daily_forecast(&self, lat: f64, lon: f64, day_offset: usize) -> Result<DailyForecast> {
        let response = match self.fetch(lat, lon) {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Dark Sky request for {lat},{lon} failed: {e}");
                return Ok(DailyForecast::degraded());
            }
        };

        let entry = response
            .daily
            .data
            .into_iter()
            .nth(day_offset)
            .ok_or_else(|| {
                SnowcastError::forecast(format!("no daily forecast entry at offset {day_offset}"))
            })?;

        Ok(DailyForecast {
            date_for: fmt_local(entry.time, "%a, %b %d, %Y"),
            timestamp: entry.time,
            text: render_forecast_text(&entry),
            cloud_cover: entry.cloud_cover,
        })
    }
}

/// Format a unix timestamp in the local timezone.
fn fmt_local(timestamp: i64, fmt: &str) -> String {
    Local
        .timestamp_opt(timestamp, 0)
        .single()
        .map(|dt| dt.format(fmt).to_string())
        .unwrap_or_default()
}

/// Render the multi-line forecast paragraph for the report body.
fn render_forecast_text(entry: &darksky::DailyEntry) -> String {
    let cloud_cover_pct = 100.0 * entry.cloud_cover;
    let sunrise = fmt_local(entry.sunrise_time, "%H:%M:%S");
    let sunset = fmt_local(entry.sunset_time, "%H:%M:%S");

    let precip = match &entry.precip_type {
        Some(precip_type) => {
            let max_time = entry
                .precip_intensity_max_time
                .map_or_else(|| "(no max time)".to_string(), |t| fmt_local(t, "%H:%M:%S"));
            let accumulation = entry.precip_accumulation.unwrap_or(0.0);
            format!(
                "\n{:.1}% chance of {precip_type}; maximum intensity at {max_time}, \
                 with {accumulation} inches of snow expected all day",
                100.0 * entry.precip_probability
            )
        }
        None => String::new(),
    };

    let visibility = entry
        .visibility
        .filter(|v| *v != 0.0)
        .map_or_else(String::new, |v| v.to_string());

    format!(
        "{}\n\
         High: will feel like {} degrees F\n\
         Low: will feel like {} degrees F{precip}\n\
         Cloud cover will be {cloud_cover_pct:.0}%\n\
         UV will be {} out of 12\n\
         Wind speed will be {} mph\n\
         Visibility will be {visibility} miles\n\
         Sun will rise at {sunrise} and set at {sunset}\n",
        entry.summary,
        entry.apparent_temperature_high,
        entry.apparent_temperature_low,
        entry.uv_index,
        entry.wind_speed,
    )
}

/// Dark Sky API response structures
mod darksky {
    use serde::Deserialize;

    /// Forecast response, trimmed to the daily block the planner uses
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub daily: DailyBlock,
    }

    #[derive(Debug, Deserialize)]
    pub struct DailyBlock {
        pub data: Vec<DailyEntry>,
    }

    /// One day of the daily forecast
    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct DailyEntry {
        pub time: i64,
        #[serde(default)]
        pub summary: String,
        #[serde(default)]
        pub cloud_cover: f64,
        #[serde(default)]
        pub apparent_temperature_high: f64,
        #[serde(default)]
        pub apparent_temperature_low: f64,
        #[serde(default)]
        pub precip_probability: f64,
        pub precip_intensity_max_time: Option<i64>,
        pub precip_accumulation: Option<f64>,
        pub precip_type: Option<String>,
        #[serde(default)]
        pub uv_index: f64,
        #[serde(default)]
        pub wind_speed: f64,
        pub visibility: Option<f64>,
        #[serde(default)]
        pub sunrise_time: i64,
        #[serde(default)]
        pub sunset_time: i64,
    }
}
