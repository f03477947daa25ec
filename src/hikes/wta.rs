//! Trail page field extraction
//!
//! Pulls the hike fields out of a WTA trail page with fixed-position CSS
//! selectors. Missing descriptive fields default to empty strings and
//! missing coordinates to `None`; a page that yields neither a name nor
//! coordinates is rejected so the loader can skip it.

use crate::error::SnowcastError;
use crate::models::Hike;
use crate::Result;
use scraper::{Html, Selector};

const LAT_SELECTOR: &str = "#trailhead-map > div:nth-of-type(3) > span:nth-of-type(1)";
const LON_SELECTOR: &str = "#trailhead-map > div:nth-of-type(3) > span:nth-of-type(2)";
const NAME_SELECTOR: &str = "#hike-top > h1";
const REGION_SELECTOR: &str = "#hike-region > span";
const LENGTH_SELECTOR: &str = "#distance > span";
const RATING_SELECTOR: &str = "#rating-stars-view-trail-rating > div > div:nth-of-type(1) > div";
const HEIGHT_GAIN_SELECTOR: &str = "#hike-stats > div:nth-of-type(3) > div:nth-of-type(1) > span";

/// Extract a hike record from a trail page.
pub fn extract_hike(html: &str, url: &str) -> Result<Hike> {
    let document = Html::parse_document(html);

    let hike = Hike {
        height_gain: select_text(&document, HEIGHT_GAIN_SELECTOR)?,
        lat: select_text(&document, LAT_SELECTOR)?.parse().ok(),
        length: select_text(&document, LENGTH_SELECTOR)?,
        lon: select_text(&document, LON_SELECTOR)?.parse().ok(),
        name: select_text(&document, NAME_SELECTOR)?,
        rating: select_text(&document, RATING_SELECTOR)?,
        region: select_text(&document, REGION_SELECTOR)?,
        url: url.to_string(),
    };

    if hike.name.is_empty() && hike.coordinates().is_none() {
        return Err(SnowcastError::scrape(format!(
            "page at {url} has neither a hike name nor trailhead coordinates"
        )));
    }

    Ok(hike)
}

/// Text of the first element matching `selector`, or an empty string.
fn select_text(document: &Html, selector: &str) -> Result<String> {
    let selector = Selector::parse(selector)
        .map_err(|e| SnowcastError::scrape(format!("bad selector {selector:?}: {e}")))?;
    Ok(document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_default())
}
