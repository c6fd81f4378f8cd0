pub mod client;
pub mod io;
pub mod mapper;
pub mod schema;

use crate::Result;
use crate::normalization::SourceRow;
use crate::traits::{ProbeResult, SourceAdapter, extension, looks_like_json, read_head};
use delorean_types::SourceKind;
use std::path::Path;

pub use self::client::{MIN_TOKEN_LEN, TogglClient, default_since, is_valid_token};
pub use self::io::read_api_rows;
pub use self::schema::TogglApiRecord;

/// Toggl API (saved JSON response) adapter
pub struct TogglApiAdapter;

impl SourceAdapter for TogglApiAdapter {
    fn kind(&self) -> SourceKind {
        SourceKind::TogglApi
    }

    fn probe(&self, path: &Path) -> ProbeResult {
        let Some(head) = read_head(path) else {
            return ProbeResult::NoMatch;
        };

        if !looks_like_json(&head) {
            return ProbeResult::NoMatch;
        }

        match extension(path).as_deref() {
            Some("json") => ProbeResult::match_high(),
            _ => ProbeResult::match_medium(),
        }
    }

    fn parse_str(&self, content: &str) -> Result<Vec<SourceRow>> {
        read_api_rows(content)
    }
}
