use crate::args::FetchArgs;
use crate::config::Config;
use anyhow::{Context, Result, bail};
use chrono::Local;
use delorean_providers::TogglClient;
use delorean_providers::toggl_api::{MIN_TOKEN_LEN, default_since, is_valid_token};
use tracing::info;

pub fn handle(config: &Config, args: FetchArgs) -> Result<()> {
    let Some(token) = args.token.as_deref().or(config.token()) else {
        bail!("no Toggl API token; pass --token or run `delorean token set <TOKEN>`");
    };
    if !is_valid_token(token) {
        bail!("Toggl API token must be at least {MIN_TOKEN_LEN} characters");
    }

    let since = args
        .since
        .unwrap_or_else(|| default_since(Local::now().date_naive()));
    let proxy = args.proxy.clone().or_else(|| config.proxy_url.clone());
    info!(since = %since, until = ?args.until, proxied = proxy.is_some(), "fetching time entries");

    let client = TogglClient::new(token).with_proxy(proxy);
    let entries = client.fetch_time_entries(since, args.until)?;
    let json = serde_json::to_string_pretty(&entries)?;

    match &args.out {
        Some(path) => {
            std::fs::write(path, format!("{json}\n"))
                .with_context(|| format!("writing {}", path.display()))?;
            println!("Saved {} time entries to {}", entries.len(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
