use chrono::{DateTime, Utc};

pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M").to_string()
}

pub fn format_optional_timestamp(timestamp: Option<&DateTime<Utc>>) -> String {
    timestamp
        .map(format_timestamp)
        .unwrap_or_else(|| "N/A".to_string())
}
