// Row normalization from typed source rows into canonical time entries
//
// Each export format is an explicit variant; `normalize_row` is the one place
// that dispatches on the source kind. Duration priority differs per format:
// CSV trusts its Duration column first, the API the stop/start delta.

use delorean_types::{EntryCollection, SourceKind, TimeEntry};
use serde_json::Value;
use tracing::debug;

use crate::toggl_api::mapper::map_api_record;
use crate::toggl_api::schema::TogglApiRecord;
use crate::toggl_csv::mapper::map_csv_record;
use crate::toggl_csv::schema::TogglCsvRecord;

/// A decoded source row, tagged with its export format
#[derive(Debug, Clone)]
pub enum SourceRow {
    Api { record: TogglApiRecord, raw: Value },
    Csv { record: TogglCsvRecord, raw: Value },
}

impl SourceRow {
    pub fn kind(&self) -> SourceKind {
        match self {
            SourceRow::Api { .. } => SourceKind::TogglApi,
            SourceRow::Csv { .. } => SourceKind::TogglCsv,
        }
    }
}

/// Convert one source row into a canonical entry; never fails
pub fn normalize_row(row: SourceRow) -> TimeEntry {
    match row {
        SourceRow::Api { record, raw } => map_api_record(&record, raw),
        SourceRow::Csv { record, raw } => map_csv_record(&record, raw),
    }
}

/// Convert a batch of rows and derive the collection's data flags
pub fn normalize_rows(rows: Vec<SourceRow>) -> EntryCollection {
    let entries: Vec<TimeEntry> = rows.into_iter().map(normalize_row).collect();
    let invalid_starts = entries.iter().filter(|e| e.start.is_none()).count();
    if invalid_starts > 0 {
        debug!(invalid_starts, "entries without a parseable start");
    }
    EntryCollection::from_entries(entries)
}
