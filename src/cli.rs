//! CLI argument definitions and parsing structures.

use clap::Parser;

/// Filter snowshoe hikes by drive distance, forecast, and drive time.
#[derive(Debug, Parser)]
#[clap(name = "snowcast", version, about = "Snowshoe hike planner")]
pub struct SnowcastArgs {
    /// Latitude to calculate departure distance and time from.
    #[clap(long = "depart_lat", default_value_t = 47.612_679)]
    pub depart_lat: f64,

    /// Longitude to calculate departure distance and time from.
    #[clap(long = "depart_lon", default_value_t = -122.301_15)]
    pub depart_lon: f64,

    /// Number of days after today to generate results for. Set to 0, along
    /// with num_hours_past_midnight_to_leave, to get results for right now.
    #[clap(long = "num_days_past_today", default_value_t = 1)]
    pub num_days_past_today: i64,

    /// Number of hours after midnight to generate driving times for. Set to
    /// 0, along with num_days_past_today, to get results for right now.
    #[clap(long = "num_hours_past_midnight_to_leave", default_value_t = 9)]
    pub num_hours_past_midnight_to_leave: i64,

    /// Maximum number of hours to drive to the trailhead.
    #[clap(long = "num_hours_to_drive", default_value_t = 1.5)]
    pub num_hours_to_drive: f64,

    /// Update cached hike data.
    #[clap(long = "save_new_hike_data")]
    pub save_new_hike_data: bool,

    /// Show verbose logging information.
    #[clap(long)]
    pub verbose: bool,
}
