use crate::types::LogLevel;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the stderr subscriber.
///
/// `DELOREAN_LOG` (an `EnvFilter` directive) overrides `level`;
/// `DELOREAN_LOG_FORMAT=json` switches to JSON lines.
pub fn init(level: LogLevel) {
    let filter =
        EnvFilter::try_from_env("DELOREAN_LOG").unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let format = std::env::var("DELOREAN_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    // A second init (tests) keeps the first subscriber
    let _ = match format.as_str() {
        "json" => registry
            .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
            .try_init(),
        _ => registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .try_init(),
    };
}
