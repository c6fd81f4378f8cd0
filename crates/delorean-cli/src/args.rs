use crate::types::{InvalidStart, LogLevel, Scale, SourceFormat};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "delorean")]
#[command(about = "Turn Toggl time entries into billing-code timecard reports", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding config.toml (default: DELOREAN_PATH, then the user config dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Log filter used when DELOREAN_LOG is not set
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the timecard report for one period of an export
    Report(ReportArgs),

    /// List the periods an export covers
    Periods(PeriodsArgs),

    /// Download time entries from the Toggl API as JSON
    Fetch(FetchArgs),

    /// Manage the saved Toggl API token
    Token {
        #[command(subcommand)]
        command: TokenCommand,
    },
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Toggl CSV export or saved API JSON
    pub file: PathBuf,

    /// Input format (detected when omitted)
    #[arg(long)]
    pub source: Option<SourceFormat>,

    #[arg(long)]
    pub scale: Option<Scale>,

    /// Any date inside the wanted period (default: the first period)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub period: Option<NaiveDate>,

    /// Move this many periods forward (negative: backward), wrapping around
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub shift: i64,

    /// Only entries of this client
    #[arg(long)]
    pub client: Option<String>,

    /// List every distinct description, not just a sample
    #[arg(long)]
    pub all_descriptions: bool,

    /// Keep entries not flagged billable
    #[arg(long)]
    pub include_non_billable: bool,

    /// Entries whose start could not be parsed, while a period is selected
    #[arg(long)]
    pub invalid_start: Option<InvalidStart>,
}

#[derive(Args, Debug)]
pub struct PeriodsArgs {
    pub file: PathBuf,

    #[arg(long)]
    pub source: Option<SourceFormat>,

    #[arg(long)]
    pub scale: Option<Scale>,
}

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// API token (default: the saved token)
    #[arg(long)]
    pub token: Option<String>,

    /// First day to download (default: 1st of the month two months back)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub since: Option<NaiveDate>,

    #[arg(long, value_name = "YYYY-MM-DD")]
    pub until: Option<NaiveDate>,

    /// Write the JSON here instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// CORS relay prefix; the target URL is passed as `?url=`
    #[arg(long)]
    pub proxy: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum TokenCommand {
    /// Save a token to config.toml
    Set { token: String },
    /// Remove the saved token
    Clear,
    /// Show the saved token, masked
    Show,
}
