use chrono::{DateTime, SecondsFormat, Utc};

/// ISO-8601 timestamp with millisecond precision and a `Z` suffix,
/// e.g. `2024-05-01T09:30:00.123Z`.
pub fn format_timestamp(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn now_iso() -> String {
    format_timestamp(Utc::now())
}

pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
