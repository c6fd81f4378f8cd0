use serde::{Deserialize, Serialize};
use std::fmt;

/// Which export format a batch of rows came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Toggl "Detailed report" CSV export
    TogglCsv,
    /// Toggl v9 `/me/time_entries?meta=true` JSON
    TogglApi,
}

impl SourceKind {
    pub fn all() -> [SourceKind; 2] {
        [SourceKind::TogglCsv, SourceKind::TogglApi]
    }

    /// Stable identifier used on the command line and in logs
    pub fn id(&self) -> &'static str {
        match self {
            SourceKind::TogglCsv => "csv",
            SourceKind::TogglApi => "api",
        }
    }

    /// Resolve a user-supplied source name, accepting the common aliases
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "csv" | "export" | "toggl-csv" | "toggl_csv" => Some(SourceKind::TogglCsv),
            "api" | "json" | "toggl-api" | "toggl_api" => Some(SourceKind::TogglApi),
            _ => None,
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// The untouched source row a canonical entry was built from
///
/// Kept for traceability only; nothing downstream reads it to make decisions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRecord {
    pub kind: SourceKind,
    pub raw: serde_json::Value,
}

impl SourceRecord {
    pub fn new(kind: SourceKind, raw: serde_json::Value) -> Self {
        Self { kind, raw }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_aliases() {
        assert_eq!(SourceKind::from_name("CSV"), Some(SourceKind::TogglCsv));
        assert_eq!(SourceKind::from_name("export"), Some(SourceKind::TogglCsv));
        assert_eq!(SourceKind::from_name(" json "), Some(SourceKind::TogglApi));
        assert_eq!(SourceKind::from_name("toggl-api"), Some(SourceKind::TogglApi));
        assert_eq!(SourceKind::from_name("xlsx"), None);
    }

    #[test]
    fn test_id_round_trips_through_from_name() {
        for kind in SourceKind::all() {
            assert_eq!(SourceKind::from_name(kind.id()), Some(kind));
        }
    }
}
