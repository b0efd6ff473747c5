use chrono::{DateTime, Utc};

/// Release tags are the UTC timestamp of the release, down to the minute.
pub fn create_tag() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%Y-%m-%dT%H%M").to_string()
}
