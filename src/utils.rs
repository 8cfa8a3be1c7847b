/// Utility functions
use crate::domain::{LaunchRecord, SortOrder};
use chrono::{DateTime, Utc};

/// Offset of the first record on a 1-based page.
pub fn page_offset(page: u32, page_size: u32) -> u64 {
    u64::from(page.saturating_sub(1)) * u64::from(page_size)
}

/// Parse the upstream UTC launch timestamp. Unparseable dates yield None.
pub fn launch_timestamp(record: &LaunchRecord) -> Option<DateTime<Utc>> {
    record.launch_date_utc.parse::<DateTime<Utc>>().ok()
}

/// Stable in-place sort by launch date. Records with unparseable dates
/// order before any dated record when ascending.
pub fn sort_by_launch_date(records: &mut [LaunchRecord], order: SortOrder) {
    match order {
        SortOrder::Ascending => records.sort_by_key(launch_timestamp),
        SortOrder::Descending => {
            records.sort_by(|a, b| launch_timestamp(b).cmp(&launch_timestamp(a)))
        }
    }
}
