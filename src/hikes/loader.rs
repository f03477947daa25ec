//! Cache-or-scrape hike loading
//!
//! Prefers the CSV cache; scrapes the trail pages listed in the source
//! URL file when the cache is empty, unreadable, or a refresh is forced.
//! Individual page failures are logged and skipped.

use super::{cache, wta, CACHE_FILE, URL_LIST_FILE};
use crate::error::SnowcastError;
use crate::models::Hike;
use crate::Result;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Loads hike records from the cache file or the source URL list.
pub struct HikeLoader {
    http: reqwest::blocking::Client,
    cache_path: std::path::PathBuf,
    url_list_path: std::path::PathBuf,
}

impl HikeLoader {
    /// Loader over the default cache and URL-list locations.
    pub fn new() -> Result<Self> {
        Self::with_paths(CACHE_FILE, URL_LIST_FILE)
    }

    /// Loader over explicit file locations.
    pub fn with_paths(cache_path: impl AsRef<Path>, url_list_path: impl AsRef<Path>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| SnowcastError::scrape(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            cache_path: cache_path.as_ref().to_path_buf(),
            url_list_path: url_list_path.as_ref().to_path_buf(),
        })
    }

    /// Load hike records, scraping when the cache yields nothing or a
    /// refresh is forced. Fatal only when both sources are unusable.
    pub fn load(&self, force_refetch: bool) -> Result<Vec<Hike>> {
        let mut hikes = Vec::new();

        if !force_refetch {
            match cache::read_hikes(&self.cache_path) {
                Ok(cached) => {
                    debug!("loaded {} hikes from {}", cached.len(), self.cache_path.display());
                    hikes = cached;
                }
                Err(e) => warn!(
                    "could not read hike cache {}: {e}",
                    self.cache_path.display()
                ),
            }
        }

        if hikes.is_empty() || force_refetch {
            hikes = self.scrape_all()?;
        }

        Ok(hikes)
    }

    /// Write hike records back to the cache file.
    pub fn save(&self, hikes: &[Hike]) -> Result<()> {
        cache::write_hikes(&self.cache_path, hikes)?;
        info!("wrote {} hikes to {}", hikes.len(), self.cache_path.display());
        Ok(())
    }

    /// Fetch and extract every URL in the source list, skipping failures.
    fn scrape_all(&self) -> Result<Vec<Hike>> {
        let url_list = std::fs::read_to_string(&self.url_list_path).map_err(|e| {
            SnowcastError::config(format!(
                "no usable hike data: cache {} is empty or unreadable and URL list {} \
                 cannot be read: {e}",
                self.cache_path.display(),
                self.url_list_path.display()
            ))
        })?;

        let mut hikes = Vec::new();
        for url in url_list.lines().map(str::trim).filter(|l| !l.is_empty()) {
            match self.scrape_one(url) {
                Ok(hike) => hikes.push(hike),
                Err(e) => warn!("error processing {url}, skipping: {e}"),
            }
        }

        info!("scraped {} hikes from {}", hikes.len(), self.url_list_path.display());
        Ok(hikes)
    }

    fn scrape_one(&self, url: &str) -> Result<Hike> {
        let body = self
            .http
            .get(url)
            .send()
            .and_then(reqwest::blocking::Response::text)
            .map_err(|e| SnowcastError::scrape(format!("fetch failed: {e}")))?;
        wta::extract_hike(&body, url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hikes::cache::write_hikes;
    use tempfile::tempdir;

    fn sample_hike() -> Hike {
        Hike {
            height_gain: "3800".to_string(),
            lat: Some(47.397_856),
            length: "8.6 miles, roundtrip".to_string(),
            lon: Some(-121.486_584),
            name: "Granite Mountain".to_string(),
            rating: "4.18".to_string(),
            region: "Snoqualmie Region".to_string(),
            url: "https://www.wta.org/go-hiking/hikes/granite-mountain".to_string(),
        }
    }

    #[test]
    fn test_load_prefers_cache() {
        let dir = tempdir().expect("temp dir");
        let cache_path = dir.path().join("hikes.csv");
        write_hikes(&cache_path, &[sample_hike()]).expect("seed cache");

        let loader =
            HikeLoader::with_paths(&cache_path, dir.path().join("urls.txt")).expect("loader");
        let hikes = loader.load(false).expect("load");

        assert_eq!(hikes.len(), 1);
        assert_eq!(hikes[0].name, "Granite Mountain");
    }

    #[test]
    fn test_both_sources_missing_is_fatal() {
        let dir = tempdir().expect("temp dir");
        let loader = HikeLoader::with_paths(
            dir.path().join("missing.csv"),
            dir.path().join("missing.txt"),
        )
        .expect("loader");

        let err = loader.load(false).unwrap_err();
        assert!(matches!(err, SnowcastError::Config { .. }));
        assert!(err.to_string().contains("no usable hike data"));
    }

    #[test]
    fn test_empty_url_list_yields_no_hikes() {
        let dir = tempdir().expect("temp dir");
        let url_path = dir.path().join("urls.txt");
        std::fs::write(&url_path, "\n\n").expect("write url list");

        let loader =
            HikeLoader::with_paths(dir.path().join("missing.csv"), &url_path).expect("loader");
        let hikes = loader.load(false).expect("load");
        assert!(hikes.is_empty());
    }

    #[test]
    fn test_save_round_trips_through_cache() {
        let dir = tempdir().expect("temp dir");
        let cache_path = dir.path().join("hikes.csv");
        let loader =
            HikeLoader::with_paths(&cache_path, dir.path().join("urls.txt")).expect("loader");

        loader.save(&[sample_hike()]).expect("save");
        let hikes = loader.load(false).expect("load");
        assert_eq!(hikes, vec![sample_hike()]);
    }
}
