// Command-line front end over the provider and engine crates.
//
// Data flow per invocation: load one export file into an EntryCollection,
// build ReportOptions from flags and config.toml, render, print. Nothing is
// cached between runs except the config file (API token and report defaults).

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod types;

pub use args::{Cli, Commands, FetchArgs, PeriodsArgs, ReportArgs, TokenCommand};
pub use commands::run;
