// src/domain/timestamps.rs

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// India Standard Time (+05:30), the zone bookings are made in. Firestore
/// timestamp objects and naive strings are read in this zone.
pub const APP_UTC_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

pub fn app_offset() -> FixedOffset {
    FixedOffset::east_opt(APP_UTC_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Wall-clock time of a timestamp in the offset it was written with.
///
/// Accepts RFC 3339 (the offset is kept, not converted), a naive
/// `YYYY-MM-DDTHH:MM:SS`, or a bare `YYYY-MM-DD` (midnight). The calendar day
/// of the result is the day the user saw when booking.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_local())
        .ok()
        .or_else(|| parse_naive(raw))
}

/// The same timestamp as an absolute instant, for ordering.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            parse_naive(raw)
                .and_then(|naive| app_offset().from_local_datetime(&naive).single())
                .map(|dt| dt.with_timezone(&Utc))
        })
}

fn parse_naive(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// RFC 3339 text for a Firestore `Timestamp`, in the app's zone.
pub fn firestore_timestamp(seconds: i64, nanoseconds: u32) -> Option<String> {
    DateTime::from_timestamp(seconds, nanoseconds)
        .map(|dt| dt.with_timezone(&app_offset()).to_rfc3339())
}

/// Reads a timestamp field that is either a string or a Firestore
/// `{"seconds", "nanoseconds"}` object (`_seconds`/`_nanoseconds` from the
/// admin SDK). Objects are stored as RFC 3339 text. Any other shape is kept
/// as its JSON text, so the record reads as having an unparseable date
/// instead of failing to decode.
pub fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.map(|value| match value {
        Value::String(text) => text,
        Value::Object(ref fields) => {
            let field = |name: &str| fields.get(name).or_else(|| fields.get(&format!("_{name}")));
            let seconds = field("seconds").and_then(Value::as_i64);
            let nanoseconds = field("nanoseconds")
                .and_then(Value::as_u64)
                .and_then(|n| u32::try_from(n).ok())
                .unwrap_or(0);
            seconds
                .and_then(|s| firestore_timestamp(s, nanoseconds))
                .unwrap_or_else(|| value.to_string())
        }
        other => other.to_string(),
    }))
}

/// `Jun 10, 2025`, the way request cards print the spraying date.
pub fn display_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
