/// Domain models for the application
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One launch event as returned by the upstream GraphQL API. Field names
/// mirror the upstream schema so the proxy payload round-trips verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub id: String,
    pub details: Option<String>,
    pub launch_success: Option<bool>,
    pub launch_date_utc: String,
    pub launch_year: String,
    pub upcoming: bool,
    pub mission_name: String,
    #[serde(default)]
    pub rocket: Option<Rocket>,
    #[serde(default)]
    pub links: Option<LaunchLinks>,
}

impl LaunchRecord {
    /// Three-way launch outcome. A recorded failure is a real outcome and
    /// must not be conflated with an outcome that is not yet known.
    pub fn outcome_label(&self) -> Option<&'static str> {
        match self.launch_success {
            Some(true) => Some("Success"),
            Some(false) => Some("Failure"),
            None => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rocket {
    pub rocket_name: Option<String>,
}

/// Media links attached to a launch; any of them may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaunchLinks {
    pub wikipedia: Option<String>,
    pub video_link: Option<String>,
    pub reddit_media: Option<String>,
    #[serde(default)]
    pub flickr_images: Vec<String>,
}

/// Which of the three upstream launch queries to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaunchStatus {
    All,
    Upcoming,
    Previous,
}

impl LaunchStatus {
    /// Field under `data` in the upstream GraphQL response.
    pub fn query_field(self) -> &'static str {
        match self {
            LaunchStatus::All => "launches",
            LaunchStatus::Upcoming => "launchesUpcoming",
            LaunchStatus::Previous => "launchesPast",
        }
    }

    /// Path segment on the proxy's REST surface.
    pub fn route_path(self) -> &'static str {
        match self {
            LaunchStatus::All => "launches",
            LaunchStatus::Upcoming => "upcomingLaunches",
            LaunchStatus::Previous => "previousLaunches",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

/// User-selected filter; mutated only by explicit filter selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterState {
    pub launch_status: LaunchStatus,
    pub sort: SortOrder,
    pub page_size: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            launch_status: LaunchStatus::All,
            sort: SortOrder::Ascending,
            page_size: 10,
        }
    }
}

/// Health check response
#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub now: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_record_deserializes_full_payload() {
        let json = serde_json::json!({
            "id": "9",
            "details": "First commercial mission",
            "launch_success": true,
            "launch_date_utc": "2010-06-04T18:45:00Z",
            "launch_year": "2010",
            "upcoming": false,
            "mission_name": "Falcon 9 Test Flight",
            "rocket": { "rocket_name": "Falcon 9" },
            "links": {
                "wikipedia": "https://en.wikipedia.org/wiki/Dragon_Spacecraft",
                "video_link": "https://www.youtube.com/watch?v=nxSxgBKlYws",
                "reddit_media": null,
                "flickr_images": ["https://farm1.example/a.jpg"]
            }
        });

        let record: LaunchRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.id, "9");
        assert_eq!(record.launch_success, Some(true));
        assert_eq!(
            record.rocket.as_ref().unwrap().rocket_name.as_deref(),
            Some("Falcon 9")
        );
        let links = record.links.as_ref().unwrap();
        assert_eq!(links.reddit_media, None);
        assert_eq!(links.flickr_images.len(), 1);
    }

    #[test]
    fn test_launch_record_tolerates_missing_subrecords() {
        let json = serde_json::json!({
            "id": "42",
            "details": null,
            "launch_success": null,
            "launch_date_utc": "2022-11-01T00:00:00Z",
            "launch_year": "2022",
            "upcoming": true,
            "mission_name": "USSF-44"
        });

        let record: LaunchRecord = serde_json::from_value(json).unwrap();
        assert!(record.rocket.is_none());
        assert!(record.links.is_none());
        assert_eq!(record.details, None);
    }

    #[test]
    fn test_outcome_label_distinguishes_failure_from_unknown() {
        let json = serde_json::json!({
            "id": "1",
            "details": null,
            "launch_success": false,
            "launch_date_utc": "2006-03-24T22:30:00Z",
            "launch_year": "2006",
            "upcoming": false,
            "mission_name": "FalconSat"
        });
        let mut record: LaunchRecord = serde_json::from_value(json).unwrap();

        assert_eq!(record.outcome_label(), Some("Failure"));
        record.launch_success = None;
        assert_eq!(record.outcome_label(), None);
        record.launch_success = Some(true);
        assert_eq!(record.outcome_label(), Some("Success"));
    }

    #[test]
    fn test_launch_status_query_fields() {
        assert_eq!(LaunchStatus::All.query_field(), "launches");
        assert_eq!(LaunchStatus::Upcoming.query_field(), "launchesUpcoming");
        assert_eq!(LaunchStatus::Previous.query_field(), "launchesPast");
    }
}
