pub mod io;
pub mod mapper;
pub mod schema;

use crate::Result;
use crate::normalization::SourceRow;
use crate::traits::{ProbeResult, SourceAdapter, extension, looks_like_json, read_head};
use delorean_types::SourceKind;
use std::path::Path;

pub use self::io::{parse_csv_content, read_csv_json_rows, read_csv_rows};
pub use self::schema::TogglCsvRecord;

/// Header columns every Toggl detailed export carries
const EXPORT_HEADER_MARKERS: [&str; 2] = ["Start date", "Duration"];

/// Toggl CSV export adapter
pub struct TogglCsvAdapter;

impl SourceAdapter for TogglCsvAdapter {
    fn kind(&self) -> SourceKind {
        SourceKind::TogglCsv
    }

    fn probe(&self, path: &Path) -> ProbeResult {
        let Some(head) = read_head(path) else {
            return ProbeResult::NoMatch;
        };

        if looks_like_json(&head) {
            // Pre-parsed rows only load when asked for explicitly
            return ProbeResult::NoMatch;
        }

        let first_line = head.lines().next().unwrap_or("");
        if EXPORT_HEADER_MARKERS
            .iter()
            .all(|marker| first_line.contains(marker))
        {
            return ProbeResult::match_high();
        }

        match extension(path).as_deref() {
            Some("csv") => ProbeResult::match_medium(),
            Some("json") => ProbeResult::NoMatch,
            _ => ProbeResult::match_low(),
        }
    }

    fn parse_str(&self, content: &str) -> Result<Vec<SourceRow>> {
        parse_csv_content(content)
    }
}
