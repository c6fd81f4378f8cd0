// Duration and timestamp parsing for both export formats.
//
// Every function here is total: unparseable input yields 0 or None, never an error.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

const TIME_FORMATS: [&str; 3] = ["%H:%M:%S", "%H:%M:%S%.f", "%H:%M"];

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parse `H:mm:ss`, `mm:ss`, or a bare number of seconds
///
/// Missing or non-numeric segments count as zero. Empty, invalid and
/// negative input all yield 0.
pub fn parse_duration(text: &str) -> u64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0;
    }

    let parts: Vec<f64> = trimmed.split(':').map(segment_value).collect();
    let seconds = match parts.as_slice() {
        [h, m, s] => h * 3600.0 + m * 60.0 + s,
        [m, s] => m * 60.0 + s,
        _ => finite_number(trimmed).unwrap_or(0.0),
    };

    if seconds.is_finite() && seconds > 0.0 {
        seconds.round() as u64
    } else {
        0
    }
}

fn segment_value(segment: &str) -> f64 {
    let segment = segment.trim();
    if segment.is_empty() {
        return 0.0;
    }
    finite_number(segment).unwrap_or(0.0)
}

fn finite_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Combine separate date (`YYYY-MM-DD`) and time (`HH:MM:SS`) fields into a local instant
///
/// Returns `None` when neither part is present or the combination is not a
/// real local time. A missing time means midnight.
pub fn build_instant(date: Option<&str>, time: Option<&str>) -> Option<DateTime<Local>> {
    let date = date.map(str::trim).filter(|d| !d.is_empty());
    let time = time.map(str::trim).filter(|t| !t.is_empty());

    if date.is_none() && time.is_none() {
        return None;
    }

    let date = NaiveDate::parse_from_str(date?, "%Y-%m-%d").ok()?;
    let time = match time {
        Some(text) => parse_time(text)?,
        None => NaiveTime::MIN,
    };

    to_local(date.and_time(time))
}

fn parse_time(text: &str) -> Option<NaiveTime> {
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(text, fmt).ok())
}

/// Parse a combined date-time such as `2025-11-27T01:07:34+00:00`
///
/// Offset-carrying timestamps are converted to local time; timestamps
/// without an offset are read as local wall-clock time.
pub fn parse_instant(text: &str) -> Option<DateTime<Local>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Local));
    }

    if let Some(naive) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
    {
        return to_local(naive);
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| to_local(date.and_time(NaiveTime::MIN)))
}

/// Map a wall-clock time to the local zone, taking the earlier instant on DST overlap
pub fn to_local(naive: NaiveDateTime) -> Option<DateTime<Local>> {
    Local.from_local_datetime(&naive).earliest()
}

/// Whole seconds from `start` to `stop`, rounded to the nearest second
pub fn seconds_between(start: DateTime<Local>, stop: DateTime<Local>) -> i64 {
    let millis = (stop - start).num_milliseconds();
    (millis as f64 / 1000.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_duration_formats() {
        assert_eq!(parse_duration("01:30:00"), 5400);
        assert_eq!(parse_duration("0:27:12"), 1632);
        assert_eq!(parse_duration("5:00"), 300);
        assert_eq!(parse_duration("90"), 90);
        assert_eq!(parse_duration(" 1:00:00 "), 3600);
    }

    #[test]
    fn test_parse_duration_degrades_to_zero() {
        assert_eq!(parse_duration(""), 0);
        assert_eq!(parse_duration("   "), 0);
        assert_eq!(parse_duration("abc"), 0);
        assert_eq!(parse_duration("1:2:3:4"), 0);
        assert_eq!(parse_duration("-30"), 0);
    }

    #[test]
    fn test_parse_duration_bad_segments_count_as_zero() {
        assert_eq!(parse_duration("x:30:00"), 1800);
        assert_eq!(parse_duration("1::"), 3600);
        assert_eq!(parse_duration("2.5"), 3);
    }

    #[test]
    fn test_build_instant_date_and_time() {
        let instant = build_instant(Some("2025-11-27"), Some("09:15:30")).unwrap();
        assert_eq!(instant.year(), 2025);
        assert_eq!(instant.month(), 11);
        assert_eq!(instant.day(), 27);
        assert_eq!(instant.hour(), 9);
        assert_eq!(instant.minute(), 15);
        assert_eq!(instant.second(), 30);
    }

    #[test]
    fn test_build_instant_missing_time_is_midnight() {
        let instant = build_instant(Some("2025-11-27"), None).unwrap();
        assert_eq!(instant.hour(), 0);
        assert_eq!(instant.minute(), 0);

        let blank = build_instant(Some("2025-11-27"), Some("  ")).unwrap();
        assert_eq!(blank, instant);
    }

    #[test]
    fn test_build_instant_absent_or_invalid() {
        assert_eq!(build_instant(None, None), None);
        assert_eq!(build_instant(Some(""), Some("")), None);
        assert_eq!(build_instant(None, Some("09:00:00")), None);
        assert_eq!(build_instant(Some("2025-13-40"), Some("09:00:00")), None);
        assert_eq!(build_instant(Some("2025-11-27"), Some("25:00:00")), None);
        assert_eq!(build_instant(Some("not a date"), None), None);
    }

    #[test]
    fn test_parse_instant_rfc3339() {
        let a = parse_instant("2025-11-27T01:07:34+00:00").unwrap();
        let b = parse_instant("2025-11-27T01:07:34Z").unwrap();
        assert_eq!(a, b);

        let later = parse_instant("2025-11-27T02:07:34+00:00").unwrap();
        assert_eq!(seconds_between(a, later), 3600);
    }

    #[test]
    fn test_parse_instant_without_offset_is_local() {
        let instant = parse_instant("2025-11-27T09:00:00").unwrap();
        assert_eq!(instant.hour(), 9);
        assert_eq!(
            parse_instant("2025-11-27"),
            build_instant(Some("2025-11-27"), None)
        );
    }

    #[test]
    fn test_parse_instant_invalid() {
        assert_eq!(parse_instant(""), None);
        assert_eq!(parse_instant("yesterday"), None);
    }

    #[test]
    fn test_seconds_between_rounds() {
        let start = parse_instant("2025-11-27T09:00:00.000+00:00").unwrap();
        let stop = parse_instant("2025-11-27T09:00:01.600+00:00").unwrap();
        assert_eq!(seconds_between(start, stop), 2);
        assert_eq!(seconds_between(stop, start), -2);
    }
}
