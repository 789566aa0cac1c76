//! ISO-8601 match timestamps, written with millisecond precision and a `Z` suffix.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

pub fn format(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

pub fn serialize<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format(date))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_browser_and_naive_formats() {
        let expected = parse("2024-05-01T18:30:00.000Z").unwrap();

        assert_eq!(parse("2024-05-01T18:30:00+00:00"), Some(expected));
        assert_eq!(parse("2024-05-01T18:30:00"), Some(expected));
        assert_eq!(parse("2024-05-01 18:30:00"), Some(expected));
        assert_eq!(parse("yesterday"), None);
    }

    #[test]
    fn test_format_uses_milliseconds() {
        let date = parse("2024-05-01T18:30:00.5Z").unwrap();
        assert_eq!(format(&date), "2024-05-01T18:30:00.500Z");
    }
}
