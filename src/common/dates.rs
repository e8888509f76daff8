use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Parses the timestamp shapes the API emits. Values without an offset are
/// read as UTC; a bare date is midnight UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

/// Absolute distance between two instants in fractional days.
pub fn days_between(a: DateTime<Utc>, b: DateTime<Utc>) -> f64 {
    let millis = (a - b).num_milliseconds() as f64;
    (millis / 1000.0 / SECONDS_PER_DAY).abs()
}

pub fn year_of(ts: DateTime<Utc>) -> i32 {
    ts.year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_parse_timestamp_shapes() {
        let expected = Utc.with_ymd_and_hms(2025, 3, 1, 10, 30, 0).unwrap();
        assert_eq!(parse_timestamp("2025-03-01T10:30:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2025-03-01T04:30:00-06:00"), Some(expected));
        assert_eq!(parse_timestamp("2025-03-01 10:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2025-03-01T10:30:00.000"), Some(expected));
        assert_eq!(
            parse_timestamp("2025-03-01"),
            Some(Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("mañana"), None);
        assert_eq!(parse_timestamp("2025-13-45"), None);
    }

    #[test]
    fn test_days_between_is_symmetric_and_fractional() {
        let a = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let b = a + Duration::hours(36);
        assert_eq!(days_between(a, b), 1.5);
        assert_eq!(days_between(b, a), 1.5);
    }
}
