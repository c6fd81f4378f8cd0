use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A time entry from Toggl's `/v9/me/time_entries?meta=true` endpoint
///
/// Only the fields the timecard needs are typed. Each one is read leniently:
/// a missing, null or wrongly typed value becomes `None` instead of failing
/// the record.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TogglApiRecord {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<u64>,

    #[serde(deserialize_with = "lenient")]
    pub workspace_id: Option<u64>,

    #[serde(deserialize_with = "lenient")]
    pub project_id: Option<u64>,

    #[serde(deserialize_with = "lenient")]
    pub billable: Option<bool>,

    /// ISO 8601, e.g. `2025-11-27T01:07:34+00:00`
    #[serde(deserialize_with = "lenient")]
    pub start: Option<String>,

    #[serde(deserialize_with = "lenient")]
    pub stop: Option<String>,

    /// Seconds; negative while the timer is still running
    #[serde(deserialize_with = "lenient")]
    pub duration: Option<f64>,

    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,

    #[serde(deserialize_with = "lenient_strings")]
    pub tags: Option<Vec<String>>,

    /// Display name of the project's client
    #[serde(deserialize_with = "lenient")]
    pub client_name: Option<String>,

    #[serde(deserialize_with = "lenient")]
    pub project_name: Option<String>,

    /// Full name of the owning user
    #[serde(deserialize_with = "lenient")]
    pub user_name: Option<String>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}
