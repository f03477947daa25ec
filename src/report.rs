//! Report rendering
//!
//! Formats surviving hikes into the fixed multi-line block the tool has
//! always printed; the same text doubles as the email body.

use crate::models::Candidate;

/// Render the full report, one block per candidate.
#[must_use]
pub fn render(candidates: &[Candidate]) -> String {
    candidates.iter().map(render_block).collect()
}

fn render_block(candidate: &Candidate) -> String {
    let hike = &candidate.hike;
    let forecast = &candidate.forecast;
    let duration = candidate.route.duration.as_deref().unwrap_or("(unknown)");
    let distance_miles = candidate.route.distance_miles.unwrap_or(0.0);

    format!(
        "Forecast for {} ({}) for {}:\n\
         {}\n\
         Hike is {}; gains {} feet; and has {} stars\n\
         Drive will take {duration} to cover {distance_miles:.2} miles\n\
         {}\n\
         -----\n",
        hike.name, hike.region, forecast.date_for, hike.url, hike.length, hike.height_gain,
        hike.rating, forecast.text,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DailyForecast, Hike, RouteSummary};

    fn candidate() -> Candidate {
        Candidate {
            hike: Hike {
                height_gain: "3800".to_string(),
                lat: Some(47.397_856),
                length: "8.6 miles, roundtrip".to_string(),
                lon: Some(-121.486_584),
                name: "Granite Mountain".to_string(),
                rating: "4.18".to_string(),
                region: "Snoqualmie Region".to_string(),
                url: "https://www.wta.org/go-hiking/hikes/granite-mountain".to_string(),
            },
            forecast: DailyForecast {
                date_for: "Sat, Jan 18, 2020".to_string(),
                timestamp: 1_579_334_400,
                text: "Clear throughout the day.\n".to_string(),
                cloud_cover: 0.05,
            },
            route: RouteSummary {
                distance_miles: Some(46.198),
                duration: Some("01:01:00".to_string()),
                duration_seconds: Some(3_660),
            },
        }
    }

    #[test]
    fn test_block_layout() {
        let report = render(&[candidate()]);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(
            lines[0],
            "Forecast for Granite Mountain (Snoqualmie Region) for Sat, Jan 18, 2020:"
        );
        assert_eq!(lines[1], "https://www.wta.org/go-hiking/hikes/granite-mountain");
        assert_eq!(
            lines[2],
            "Hike is 8.6 miles, roundtrip; gains 3800 feet; and has 4.18 stars"
        );
        assert_eq!(lines[3], "Drive will take 01:01:00 to cover 46.20 miles");
        assert_eq!(lines[4], "Clear throughout the day.");
        assert_eq!(lines.last(), Some(&"-----"));
    }

    #[test]
    fn test_one_block_per_candidate() {
        let report = render(&[candidate(), candidate()]);
        assert_eq!(report.matches("-----").count(), 2);
    }

    #[test]
    fn test_empty_report() {
        assert!(render(&[]).is_empty());
    }
}
