/// Client-side term search over fetched launches
use crate::domain::LaunchRecord;

/// Case-insensitive substring search across every text field of each
/// record, walking nested sub-records depth-first. A record contributes at
/// most one result no matter how many of its fields match, and results
/// keep the order of the input slice.
pub fn search_records(records: &[LaunchRecord], term: &str) -> Vec<LaunchRecord> {
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|record| record_matches(record, &needle))
        .cloned()
        .collect()
}

fn contains(value: Option<&str>, needle: &str) -> bool {
    value.is_some_and(|v| v.to_lowercase().contains(needle))
}

/// Field walk in upstream schema order: scalar fields first, then the
/// rocket and links sub-records. Short-circuits on the first hit.
fn record_matches(record: &LaunchRecord, needle: &str) -> bool {
    if contains(Some(&record.id), needle)
        || contains(record.details.as_deref(), needle)
        || contains(Some(&record.launch_date_utc), needle)
        || contains(Some(&record.launch_year), needle)
        || contains(Some(&record.mission_name), needle)
    {
        return true;
    }

    if let Some(rocket) = &record.rocket {
        if contains(rocket.rocket_name.as_deref(), needle) {
            return true;
        }
    }

    if let Some(links) = &record.links {
        if contains(links.wikipedia.as_deref(), needle)
            || contains(links.video_link.as_deref(), needle)
            || contains(links.reddit_media.as_deref(), needle)
        {
            return true;
        }
        if links
            .flickr_images
            .iter()
            .any(|url| url.to_lowercase().contains(needle))
        {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LaunchLinks, Rocket};

    fn record(id: &str, mission: &str) -> LaunchRecord {
        LaunchRecord {
            id: id.to_string(),
            details: None,
            launch_success: None,
            launch_date_utc: "2020-01-01T00:00:00Z".to_string(),
            launch_year: "2020".to_string(),
            upcoming: false,
            mission_name: mission.to_string(),
            rocket: None,
            links: None,
        }
    }

    #[test]
    fn test_unmatched_term_yields_empty() {
        let records = vec![record("1", "Starlink-15"), record("2", "CRS-21")];
        assert!(search_records(&records, "zzz-no-match").is_empty());
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let records = vec![record("1", "Falcon Heavy Demo")];
        assert_eq!(search_records(&records, "fAlCoN").len(), 1);
    }

    #[test]
    fn test_at_most_one_result_per_record() {
        // Both the mission name and the nested rocket name match.
        let mut launch = record("1", "Falcon 9 Test Flight");
        launch.rocket = Some(Rocket {
            rocket_name: Some("Falcon 9".to_string()),
        });
        let results = search_records(&[launch], "falcon");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "1");
    }

    #[test]
    fn test_nested_only_match_surfaces_top_level_record() {
        let mut launch = record("1", "CRS-21");
        launch.rocket = Some(Rocket {
            rocket_name: Some("Falcon 9".to_string()),
        });
        let results = search_records(&[launch], "falcon");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].mission_name, "CRS-21");
    }

    #[test]
    fn test_link_fields_are_searched() {
        let mut launch = record("1", "CRS-21");
        launch.links = Some(LaunchLinks {
            wikipedia: Some("https://en.wikipedia.org/wiki/SpaceX_CRS-21".to_string()),
            video_link: None,
            reddit_media: None,
            flickr_images: vec!["https://farm1.example/dragon.jpg".to_string()],
        });
        assert_eq!(search_records(std::slice::from_ref(&launch), "wiki").len(), 1);
        assert_eq!(search_records(&[launch], "dragon").len(), 1);
    }

    #[test]
    fn test_absent_fields_are_skipped() {
        // details, rocket and links are all None; only scalar fields match.
        let records = vec![record("1", "Starlink-15")];
        assert!(search_records(&records, "dragon").is_empty());
    }

    #[test]
    fn test_results_preserve_input_order() {
        let records = vec![
            record("1", "Starlink-15"),
            record("2", "CRS-21"),
            record("3", "Starlink-16"),
        ];
        let results = search_records(&records, "starlink");
        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }
}
