use delorean_types::{EntryCollection, SourceKind};
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::normalization::normalize_rows;
use crate::toggl_api::{TogglApiAdapter, read_api_rows};
use crate::toggl_csv::{TogglCsvAdapter, read_csv_rows};
use crate::traits::SourceAdapter;
use crate::{Error, Result};

/// Create the adapter for a source kind
pub fn create_adapter(kind: SourceKind) -> Box<dyn SourceAdapter> {
    match kind {
        SourceKind::TogglCsv => Box::new(TogglCsvAdapter),
        SourceKind::TogglApi => Box::new(TogglApiAdapter),
    }
}

/// Create adapters for every supported source
pub fn create_all_adapters() -> Vec<Box<dyn SourceAdapter>> {
    SourceKind::all().into_iter().map(create_adapter).collect()
}

/// Pick the source kind whose adapter is most confident about `path`
pub fn detect_source(path: &Path) -> Result<SourceKind> {
    let best = create_all_adapters()
        .into_iter()
        .map(|adapter| (adapter.kind(), adapter.probe(path)))
        .filter(|(_, probe)| probe.is_match())
        .max_by(|a, b| a.1.confidence().total_cmp(&b.1.confidence()));

    match best {
        Some((kind, probe)) => {
            debug!(path = %path.display(), source = %kind, confidence = probe.confidence(), "detected source");
            Ok(kind)
        }
        None => Err(Error::Provider(format!(
            "cannot detect the export format of {} (use --source csv|api)",
            path.display()
        ))),
    }
}

/// Load and normalize a file, detecting the source kind when not given
pub fn load_file(path: &Path, kind: Option<SourceKind>) -> Result<EntryCollection> {
    let kind = match kind {
        Some(kind) => kind,
        None => detect_source(path)?,
    };

    // Invalid UTF-8 is replaced, not fatal, so one bad row keeps the rest
    let bytes = std::fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes);
    let rows = create_adapter(kind).parse_str(&content)?;
    debug!(path = %path.display(), source = %kind, rows = rows.len(), "parsed source rows");
    Ok(normalize_rows(rows))
}

/// Load a CSV export from any reader (stdin, an in-memory buffer)
pub fn load_csv_reader<R: Read>(reader: R) -> Result<EntryCollection> {
    Ok(normalize_rows(read_csv_rows(reader)?))
}

/// Load API records from JSON text
pub fn load_api_json_str(text: &str) -> Result<EntryCollection> {
    Ok(normalize_rows(read_api_rows(text)?))
}
