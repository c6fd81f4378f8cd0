use delorean_types::SourceKind;
use std::io::Read;
use std::path::Path;

use crate::Result;
use crate::normalization::SourceRow;

/// Source format adapter
///
/// Responsibilities:
/// - Recognise files in its export format
/// - Decode raw text into typed source rows without dropping the batch on bad rows
pub trait SourceAdapter: Send + Sync {
    /// Which source kind this adapter reads
    fn kind(&self) -> SourceKind;

    /// Check if a file looks like this adapter's format
    fn probe(&self, path: &Path) -> ProbeResult;

    /// Decode a whole document into source rows
    fn parse_str(&self, content: &str) -> Result<Vec<SourceRow>>;
}

// --- Helper types ---

/// Probe result with confidence score
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProbeResult {
    /// Adapter can handle this file with given confidence (0.0 - 1.0)
    Confidence(f32),
    /// Adapter cannot handle this file
    NoMatch,
}

impl ProbeResult {
    /// Create high confidence match (1.0)
    pub fn match_high() -> Self {
        ProbeResult::Confidence(1.0)
    }

    /// Create medium confidence match (0.5)
    pub fn match_medium() -> Self {
        ProbeResult::Confidence(0.5)
    }

    /// Create low confidence match (0.3)
    pub fn match_low() -> Self {
        ProbeResult::Confidence(0.3)
    }

    /// Check if this is a match (confidence > 0)
    pub fn is_match(&self) -> bool {
        matches!(self, ProbeResult::Confidence(c) if *c > 0.0)
    }

    /// Get confidence score (0.0 if NoMatch)
    pub fn confidence(&self) -> f32 {
        match self {
            ProbeResult::Confidence(c) => *c,
            ProbeResult::NoMatch => 0.0,
        }
    }
}

/// Lowercased file extension, if any
pub(crate) fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}

/// First few KiB of a file as text, `None` for unreadable or empty files
pub(crate) fn read_head(path: &Path) -> Option<String> {
    if !path.is_file() {
        return None;
    }

    let mut buf = Vec::with_capacity(4096);
    std::fs::File::open(path)
        .ok()?
        .take(4096)
        .read_to_end(&mut buf)
        .ok()?;

    let head = String::from_utf8_lossy(&buf)
        .trim_start_matches('\u{feff}')
        .to_string();
    if head.trim().is_empty() {
        None
    } else {
        Some(head)
    }
}

/// Whether text starts like a JSON document
pub(crate) fn looks_like_json(head: &str) -> bool {
    matches!(head.trim_start().chars().next(), Some('[') | Some('{'))
}
