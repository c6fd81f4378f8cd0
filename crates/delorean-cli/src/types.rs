use clap::ValueEnum;
use delorean_engine::PeriodScale;
use delorean_types::{InvalidStartPolicy, SourceKind};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum SourceFormat {
    #[value(alias = "export")]
    Csv,
    #[value(alias = "json")]
    Api,
}

impl From<SourceFormat> for SourceKind {
    fn from(format: SourceFormat) -> Self {
        match format {
            SourceFormat::Csv => SourceKind::TogglCsv,
            SourceFormat::Api => SourceKind::TogglApi,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Scale {
    Day,
    Week,
    Month,
    All,
}

impl From<Scale> for PeriodScale {
    fn from(scale: Scale) -> Self {
        match scale {
            Scale::Day => PeriodScale::Day,
            Scale::Week => PeriodScale::Week,
            Scale::Month => PeriodScale::Month,
            Scale::All => PeriodScale::All,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum InvalidStart {
    Exclude,
    Include,
}

impl From<InvalidStart> for InvalidStartPolicy {
    fn from(value: InvalidStart) -> Self {
        match value {
            InvalidStart::Exclude => InvalidStartPolicy::Exclude,
            InvalidStart::Include => InvalidStartPolicy::Include,
        }
    }
}
