//! Builders for entries and CSV exports.

use chrono::{DateTime, Local};
use delorean_types::{SourceKind, SourceRecord, TimeEntry};
use serde_json::Value;

/// Fluent construction of canonical entries
///
/// Defaults: empty text fields, no start, no duration, billable unknown.
#[derive(Debug, Clone)]
pub struct EntryBuilder {
    entry: TimeEntry,
}

impl Default for EntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryBuilder {
    pub fn new() -> Self {
        Self {
            entry: TimeEntry {
                description: String::new(),
                start: None,
                stop: None,
                duration_seconds: None,
                project_name: String::new(),
                client_name: None,
                tag_names: Vec::new(),
                billable: None,
                user_name: String::new(),
                original: SourceRecord::new(SourceKind::TogglCsv, Value::Null),
            },
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.entry.description = description.to_string();
        self
    }

    pub fn project(mut self, project: &str) -> Self {
        self.entry.project_name = project.to_string();
        self
    }

    pub fn client(mut self, client: &str) -> Self {
        self.entry.client_name = Some(client.to_string());
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.entry.tag_names = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn seconds(mut self, seconds: u64) -> Self {
        self.entry.duration_seconds = Some(seconds);
        self
    }

    pub fn start(mut self, start: DateTime<Local>) -> Self {
        self.entry.start = Some(start);
        self
    }

    pub fn billable(mut self, billable: Option<bool>) -> Self {
        self.entry.billable = billable;
        self
    }

    pub fn build(self) -> TimeEntry {
        self.entry
    }
}

/// Toggl CSV export text assembled row by row
///
/// ```
/// use delorean_testing::TogglCsv;
///
/// let csv = TogglCsv::new()
///     .row(&[("Description", "Fix"), ("Tags", "tlp12345"), ("Duration", "1:00:00")])
///     .build();
/// assert!(csv.starts_with("Description,"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TogglCsv {
    rows: Vec<Vec<String>>,
}

impl TogglCsv {
    pub const HEADERS: [&'static str; 12] = [
        "Description",
        "Billable",
        "Client",
        "Duration",
        "Member",
        "Email",
        "Project",
        "Tags",
        "Start date",
        "Start time",
        "Stop date",
        "Stop time",
    ];

    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row; columns not named are left empty
    pub fn row(mut self, fields: &[(&str, &str)]) -> Self {
        let row = Self::HEADERS
            .iter()
            .map(|header| {
                fields
                    .iter()
                    .find(|(name, _)| name == header)
                    .map(|(_, value)| value.to_string())
                    .unwrap_or_default()
            })
            .collect();
        self.rows.push(row);
        self
    }

    pub fn build(&self) -> String {
        let mut out = Self::HEADERS.join(",");
        out.push('\n');
        for row in &self.rows {
            let cells: Vec<String> = row.iter().map(|cell| quote(cell)).collect();
            out.push_str(&cells.join(","));
            out.push('\n');
        }
        out
    }
}

fn quote(cell: &str) -> String {
    if cell.contains([',', '"', '\n']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
