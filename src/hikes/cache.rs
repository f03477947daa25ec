//! CSV cache for hike records
//!
//! The cache is a plain CSV file with an alphabetically sorted header
//! (`height_gain, lat, length, lon, name, rating, region, url`); the
//! `Hike` struct declares its fields in that order so serialization
//! preserves the layout.

use crate::models::Hike;
use crate::Result;
use std::path::Path;

/// Read all hike records from the cache file.
pub fn read_hikes(path: impl AsRef<Path>) -> Result<Vec<Hike>> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;
    let mut hikes = Vec::new();
    for record in reader.deserialize() {
        hikes.push(record?);
    }
    Ok(hikes)
}

/// Write hike records to the cache file, replacing its contents.
pub fn write_hikes(path: impl AsRef<Path>, hikes: &[Hike]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    for hike in hikes {
        writer.serialize(hike)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn sample_hikes() -> Vec<Hike> {
        vec![
            Hike {
                height_gain: "3800".to_string(),
                lat: Some(47.397_856),
                length: "8.6 miles, roundtrip".to_string(),
                lon: Some(-121.486_584),
                name: "Granite Mountain".to_string(),
                rating: "4.18".to_string(),
                region: "Snoqualmie Region".to_string(),
                url: "https://www.wta.org/go-hiking/hikes/granite-mountain".to_string(),
            },
            Hike {
                height_gain: String::new(),
                lat: None,
                length: String::new(),
                lon: None,
                name: "Mystery Trail".to_string(),
                rating: String::new(),
                region: String::new(),
                url: "https://www.wta.org/go-hiking/hikes/mystery".to_string(),
            },
        ]
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let file = NamedTempFile::new().expect("temp file");
        let hikes = sample_hikes();

        write_hikes(file.path(), &hikes).expect("write cache");
        let loaded = read_hikes(file.path()).expect("read cache");

        assert_eq!(loaded, hikes);
    }

    #[test]
    fn test_header_is_sorted() {
        let file = NamedTempFile::new().expect("temp file");
        write_hikes(file.path(), &sample_hikes()).expect("write cache");

        let contents = std::fs::read_to_string(file.path()).expect("read file");
        let header = contents.lines().next().expect("header line");
        assert_eq!(
            header,
            "height_gain,lat,length,lon,name,rating,region,url"
        );
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(read_hikes("definitely/not/a/real/cache.csv").is_err());
    }
}
