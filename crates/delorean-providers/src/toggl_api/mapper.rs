use delorean_types::{SourceKind, SourceRecord, TimeEntry, non_empty};
use serde_json::Value;

use super::schema::TogglApiRecord;
use crate::parse::{parse_instant, seconds_between};

/// Map one API record to a canonical entry
///
/// Duration priority: the stop/start delta when both parse, then the
/// record's own non-negative `duration`, then the magnitude of a negative
/// (running timer) `duration`, then zero. A negative delta is ignored.
pub(crate) fn map_api_record(record: &TogglApiRecord, raw: Value) -> TimeEntry {
    let start = record.start.as_deref().and_then(parse_instant);
    let stop = record.stop.as_deref().and_then(parse_instant);

    let from_span = match (start, stop) {
        (Some(start), Some(stop)) => u64::try_from(seconds_between(start, stop)).ok(),
        _ => None,
    };
    let from_field = record
        .duration
        .filter(|d| d.is_finite())
        .map(|d| d.abs().round() as u64);
    let duration_seconds = from_span.or(from_field).unwrap_or(0);

    TimeEntry {
        description: record.description.clone().unwrap_or_default(),
        start,
        stop,
        duration_seconds: Some(duration_seconds),
        project_name: record.project_name.clone().unwrap_or_default(),
        client_name: non_empty(record.client_name.as_deref()),
        tag_names: record.tags.clone().unwrap_or_default(),
        billable: record.billable,
        user_name: record.user_name.clone().unwrap_or_default(),
        original: SourceRecord::new(SourceKind::TogglApi, raw),
    }
}
