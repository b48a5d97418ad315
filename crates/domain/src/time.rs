//! Instant parsing and formatting.
//!
//! All instants are UTC. Text without an explicit offset (`Z` or `±HH:MM`)
//! is read as UTC so that range comparisons never depend on the host locale.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use std::borrow::Cow;

/// Naive layouts tried when RFC 3339 parsing fails on offset-free text.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Offset-bearing layouts RFC 3339 does not cover.
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M%:z"];

/// Parses text into a UTC instant.
///
/// Returns `None` for empty or unparseable input.
#[must_use]
pub fn parse_instant(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let explicit_offset = has_explicit_offset(text);
    let normalized: Cow<'_, str> = if explicit_offset {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(format!("{text}Z"))
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return Some(dt.with_timezone(&Utc));
    }

    if explicit_offset {
        return OFFSET_FORMATS
            .iter()
            .find_map(|fmt| DateTime::parse_from_str(text, fmt).ok())
            .map(|dt| dt.with_timezone(&Utc));
    }

    if let Some(dt) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
    {
        return Some(dt.and_utc());
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Formats an instant as ISO-8601 text with millisecond precision and a `Z` suffix.
#[must_use]
pub fn format_instant(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn has_explicit_offset(text: &str) -> bool {
    if text.ends_with(['Z', 'z']) {
        return true;
    }
    // Only the time part may carry a sign; the date part uses '-' separators.
    match text.find(['T', 't', ' ']) {
        Some(idx) => text[idx + 1..].contains(['+', '-']),
        None => false,
    }
}

/// Serde adapter for optional instants rendered with [`format_instant`].
pub mod serde_instant {
    use super::{format_instant, parse_instant};
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(instant) => serializer.serialize_str(&format_instant(instant)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(text) => parse_instant(&text)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid instant: {text}"))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 5, h, m, s).unwrap()
    }

    #[test]
    fn test_parse_zulu() {
        assert_eq!(parse_instant("2025-07-05T00:00:01Z"), Some(utc(0, 0, 1)));
        assert_eq!(parse_instant("2025-07-05T00:00:01.000Z"), Some(utc(0, 0, 1)));
    }

    #[test]
    fn test_missing_offset_is_utc() {
        assert_eq!(parse_instant("2025-07-05T10:30:00"), Some(utc(10, 30, 0)));
        assert_eq!(parse_instant("2025-07-05 10:30:00"), Some(utc(10, 30, 0)));
        assert_eq!(parse_instant("2025-07-05T10:30"), Some(utc(10, 30, 0)));
        assert_eq!(parse_instant("2025-07-05"), Some(utc(0, 0, 0)));
    }

    #[test]
    fn test_explicit_offset_is_honoured() {
        assert_eq!(parse_instant("2025-07-05T12:00:00+02:00"), Some(utc(10, 0, 0)));
        assert_eq!(parse_instant("2025-07-05T08:00:00-02:00"), Some(utc(10, 0, 0)));
        assert_eq!(parse_instant("2025-07-05 12:00:00+02:00"), Some(utc(10, 0, 0)));
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse_instant(""), None);
        assert_eq!(parse_instant("   "), None);
        assert_eq!(parse_instant("invalid"), None);
        assert_eq!(parse_instant("2025-13-40T00:00:00Z"), None);
        assert_eq!(parse_instant("NaN"), None);
    }

    #[test]
    fn test_format_millis() {
        assert_eq!(format_instant(&utc(0, 0, 2)), "2025-07-05T00:00:02.000Z");
    }
}
