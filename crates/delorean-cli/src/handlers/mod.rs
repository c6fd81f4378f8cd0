pub mod fetch;
pub mod periods;
pub mod report;
pub mod token;

use crate::types::SourceFormat;
use anyhow::{Context, Result};
use delorean_providers::load_file;
use delorean_types::EntryCollection;
use std::path::Path;
use tracing::info;

fn load_collection(path: &Path, source: Option<SourceFormat>) -> Result<EntryCollection> {
    let collection = load_file(path, source.map(Into::into))
        .with_context(|| format!("cannot load {}", path.display()))?;
    info!(
        path = %path.display(),
        entries = collection.len(),
        client_data = collection.has_client_data,
        billable_data = collection.has_billable_data,
        "loaded time entries"
    );
    Ok(collection)
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
