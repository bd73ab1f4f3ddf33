use chrono::{DateTime, NaiveDateTime, Utc};

const UTC_LAYOUT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Parses `createdAt`/`mergedAt`/`authoredDate` values.
///
/// The plain `Z`-suffixed form is tried first; anything else must be valid
/// RFC 3339 with an offset and is converted to UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, UTC_LAYOUT) {
        return Some(naive.and_utc());
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|datetime| datetime.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_utc_form() {
        let parsed = parse_timestamp("2024-01-01T10:20:30Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 1, 10, 20, 30).unwrap());
    }

    #[test]
    fn test_parse_offset_form_normalized_to_utc() {
        let parsed = parse_timestamp("2024-01-01T12:00:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_fractional_seconds() {
        let parsed = parse_timestamp("2024-03-15T08:00:00.250Z").unwrap();
        assert_eq!(parsed.timestamp_millis() % 1000, 250);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("2024-01-01").is_none());
        assert!(parse_timestamp("2024-13-01T00:00:00Z").is_none());
        assert!(parse_timestamp("yesterday").is_none());
    }
}
