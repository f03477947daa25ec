//! Run configuration for the `snowcast` pipeline
//!
//! Read-only parameters for one run, built from the CLI arguments and
//! validated before any network call is made. API keys and email settings
//! come from the environment instead.

use crate::cli::SnowcastArgs;
use crate::error::SnowcastError;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Straight-line miles assumed drivable per hour, used for the cheap
/// pre-filter before any forecast or directions call.
pub const MILES_PER_DRIVE_HOUR: f64 = 75.0;

/// Read-only parameters for a single pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Departure point latitude
    pub depart_lat: f64,
    /// Departure point longitude
    pub depart_lon: f64,
    /// Day offset into the daily forecast (0 = today)
    pub num_days_past_today: i64,
    /// Hours past local midnight to leave on the forecast day
    pub num_hours_past_midnight_to_leave: i64,
    /// Maximum acceptable drive, in hours
    pub num_hours_to_drive: f64,
    /// Write freshly loaded hike data back to the cache file
    pub save_new_hike_data: bool,
    /// Emit verbose diagnostics
    pub verbose: bool,
}

impl RunConfig {
    /// Build and validate a run configuration from parsed CLI arguments.
    pub fn from_args(args: &SnowcastArgs) -> Result<Self> {
        let config = Self {
            depart_lat: args.depart_lat,
            depart_lon: args.depart_lon,
            num_days_past_today: args.num_days_past_today,
            num_hours_past_midnight_to_leave: args.num_hours_past_midnight_to_leave,
            num_hours_to_drive: args.num_hours_to_drive,
            save_new_hike_data: args.save_new_hike_data,
            verbose: args.verbose,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate all run parameters.
    pub fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.depart_lat) {
            return Err(SnowcastError::config(format!(
                "depart_lat {} is outside -90..=90",
                self.depart_lat
            )));
        }
        if !(-180.0..=180.0).contains(&self.depart_lon) {
            return Err(SnowcastError::config(format!(
                "depart_lon {} is outside -180..=180",
                self.depart_lon
            )));
        }
        if self.num_days_past_today < 0 {
            return Err(SnowcastError::config(
                "num_days_past_today cannot be negative",
            ));
        }
        if self.num_hours_past_midnight_to_leave < 0 {
            return Err(SnowcastError::config(
                "num_hours_past_midnight_to_leave cannot be negative",
            ));
        }
        if self.num_hours_to_drive <= 0.0 || !self.num_hours_to_drive.is_finite() {
            return Err(SnowcastError::config(
                "num_hours_to_drive must be a positive number of hours",
            ));
        }
        Ok(())
    }

    /// Straight-line pre-filter threshold in miles.
    #[must_use]
    pub fn distance_cutoff_miles(&self) -> f64 {
        self.num_hours_to_drive * MILES_PER_DRIVE_HOUR
    }

    /// Final drive-time threshold in seconds.
    #[must_use]
    pub fn duration_cutoff_seconds(&self) -> i64 {
        (self.num_hours_to_drive * 3600.0) as i64
    }
}
