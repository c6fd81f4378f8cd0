use serde::{Deserialize, Serialize};

/// One row of a Toggl "Detailed report" CSV export
///
/// Every column is optional so a short or oddly shaped row still maps to an
/// entry. Columns not listed here are kept only in the raw record.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TogglCsvRecord {
    #[serde(rename = "Description")]
    pub description: Option<String>,

    /// `Yes` or `No`
    #[serde(rename = "Billable")]
    pub billable: Option<String>,

    #[serde(rename = "Client")]
    pub client: Option<String>,

    /// `H:mm:ss`, e.g. `0:27:12`
    #[serde(rename = "Duration")]
    pub duration: Option<String>,

    /// User display name (`User` in older exports)
    #[serde(rename = "Member", alias = "User")]
    pub member: Option<String>,

    #[serde(rename = "Email")]
    pub email: Option<String>,

    #[serde(rename = "Project")]
    pub project: Option<String>,

    /// Comma separated tag names
    #[serde(rename = "Tags")]
    pub tags: Option<String>,

    /// `YYYY-MM-DD`
    #[serde(rename = "Start date")]
    pub start_date: Option<String>,

    /// `HH:MM:SS`
    #[serde(rename = "Start time")]
    pub start_time: Option<String>,

    #[serde(rename = "Stop date", alias = "End date")]
    pub stop_date: Option<String>,

    #[serde(rename = "Stop time", alias = "End time")]
    pub stop_time: Option<String>,
}
