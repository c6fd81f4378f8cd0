use delorean_types::{SourceKind, SourceRecord, TimeEntry, non_empty, split_list};
use serde_json::Value;

use super::schema::TogglCsvRecord;
use crate::parse::{build_instant, parse_duration, seconds_between};

/// Map one CSV export row to a canonical entry
///
/// The `Duration` column is trusted first. Only when it is missing or zero
/// and both start and stop parse is the duration taken from the stop/start
/// delta.
pub(crate) fn map_csv_record(record: &TogglCsvRecord, raw: Value) -> TimeEntry {
    let start = build_instant(record.start_date.as_deref(), record.start_time.as_deref());
    let stop = build_instant(record.stop_date.as_deref(), record.stop_time.as_deref());

    let mut duration_seconds = record.duration.as_deref().map(parse_duration).unwrap_or(0);
    if duration_seconds == 0
        && let (Some(start), Some(stop)) = (start, stop)
    {
        duration_seconds = u64::try_from(seconds_between(start, stop)).unwrap_or(0);
    }

    let tag_names = record.tags.as_deref().map(split_list).unwrap_or_default();

    TimeEntry {
        description: record.description.clone().unwrap_or_default(),
        start,
        stop,
        duration_seconds: Some(duration_seconds),
        project_name: record.project.clone().unwrap_or_default(),
        client_name: non_empty(record.client.as_deref()),
        tag_names,
        billable: parse_billable(record.billable.as_deref()),
        user_name: record.member.clone().unwrap_or_default(),
        original: SourceRecord::new(SourceKind::TogglCsv, raw),
    }
}

fn parse_billable(value: Option<&str>) -> Option<bool> {
    match value.map(str::trim) {
        Some("Yes") => Some(true),
        Some("No") => Some(false),
        _ => None,
    }
}
