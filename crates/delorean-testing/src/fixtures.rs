//! Sample exports used across crates.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const CSV_EXPORT: &str = "toggl_export.csv";
pub const API_EXPORT: &str = "toggl_api.json";

/// Sample file manager for test data.
pub struct SampleFiles {
    samples_dir: PathBuf,
}

impl Default for SampleFiles {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleFiles {
    /// Samples live in `crates/delorean-providers/tests/samples/`.
    pub fn new() -> Self {
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let crates_dir = manifest_dir.parent().unwrap_or(&manifest_dir);
        let samples_dir = crates_dir.join("delorean-providers/tests/samples");

        Self { samples_dir }
    }

    pub fn path(&self, sample_name: &str) -> PathBuf {
        self.samples_dir.join(sample_name)
    }

    /// Copy a sample file to a destination.
    pub fn copy_to(&self, sample_name: &str, dest: &Path) -> Result<()> {
        let source = self.path(sample_name);
        fs::copy(&source, dest).with_context(|| format!("copying {}", source.display()))?;
        Ok(())
    }
}
