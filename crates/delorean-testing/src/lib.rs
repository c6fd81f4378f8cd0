//! Testing infrastructure for delorean tests.
//!
//! - `TestWorld`: isolated temp workspace and data directory for CLI runs
//! - `builders`: canonical entries and Toggl CSV exports built in code
//! - `fixtures`: the sample exports shipped with the providers crate
//! - `assertions`: checks over rendered report text

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod world;

pub use builders::{EntryBuilder, TogglCsv};
pub use fixtures::SampleFiles;
pub use world::{CliResult, TestWorld};
