// Error types
pub mod error;

// Trait-based adapter architecture (public API)
pub mod traits;

// Source implementations
pub mod toggl_api;
pub mod toggl_csv;

// Duration and date parsing shared by both sources
pub mod parse;

// Row dispatch into the canonical entry model
pub mod normalization;

// Source registry and detection
pub mod registry;

// Traits
pub use traits::{ProbeResult, SourceAdapter};

// Source adapters
pub use toggl_api::{TogglApiAdapter, TogglClient};
pub use toggl_csv::TogglCsvAdapter;

// Normalization
pub use normalization::{SourceRow, normalize_row, normalize_rows};

// Parsing helpers
pub use parse::{build_instant, parse_duration, parse_instant};

// Registry
pub use registry::{create_adapter, detect_source, load_api_json_str, load_csv_reader, load_file};

// Error types
pub use error::{Error, Result};
