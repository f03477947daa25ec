//! Hike data loading
//!
//! Hike records come from a flat CSV cache when present, or are scraped
//! from the trail pages listed in the source URL file.

pub mod cache;
pub mod loader;
pub mod wta;

pub use loader::HikeLoader;

/// Cached hike table, header-sorted CSV
pub const CACHE_FILE: &str = "snowshoe_hikes.csv";

/// Newline-delimited list of trail page URLs to scrape
pub const URL_LIST_FILE: &str = "snowshoe_urls.txt";
