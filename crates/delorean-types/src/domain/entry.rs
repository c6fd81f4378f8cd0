use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::source::SourceRecord;

/// A unified time entry, independent of the export format it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub description: String,
    /// `None` when the source start could not be parsed
    pub start: Option<DateTime<Local>>,
    pub stop: Option<DateTime<Local>>,
    pub duration_seconds: Option<u64>,
    pub project_name: String,
    pub client_name: Option<String>,
    pub tag_names: Vec<String>,
    pub billable: Option<bool>,
    pub user_name: String,
    pub original: SourceRecord,
}

impl TimeEntry {
    /// Duration with absent treated as zero
    pub fn seconds(&self) -> u64 {
        self.duration_seconds.unwrap_or(0)
    }

    /// Local calendar day the entry started on
    pub fn start_day(&self) -> Option<NaiveDate> {
        self.start.map(|start| start.date_naive())
    }

    pub fn has_client(&self) -> bool {
        self.client_name.as_deref().is_some_and(|c| !c.is_empty())
    }

    pub fn is_billable(&self) -> bool {
        self.billable == Some(true)
    }
}

/// All entries loaded from one data source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryCollection {
    /// At least one entry names a client
    pub has_client_data: bool,
    /// At least one entry carries an explicit billable flag
    pub has_billable_data: bool,
    pub entries: Vec<TimeEntry>,
}

impl EntryCollection {
    pub fn from_entries(entries: Vec<TimeEntry>) -> Self {
        let has_client_data = entries.iter().any(TimeEntry::has_client);
        let has_billable_data = entries.iter().any(|e| e.billable.is_some());

        Self {
            has_client_data,
            has_billable_data,
            entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// What to do with entries whose start failed to parse while a date range is active
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidStartPolicy {
    #[default]
    Exclude,
    Include,
}
