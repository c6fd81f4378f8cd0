use crate::config::Config;
use anyhow::{Result, bail};
use delorean_providers::toggl_api::{MIN_TOKEN_LEN, is_valid_token};
use std::path::Path;

pub fn set(mut config: Config, config_path: &Path, token: &str) -> Result<()> {
    let token = token.trim();
    if !is_valid_token(token) {
        bail!("Toggl API token must be at least {MIN_TOKEN_LEN} characters");
    }

    config.api_token = Some(token.to_string());
    config.save_to(config_path)?;
    println!("Token saved to {}", config_path.display());
    Ok(())
}

pub fn clear(mut config: Config, config_path: &Path) -> Result<()> {
    if config.api_token.take().is_none() {
        println!("No token saved");
        return Ok(());
    }

    config.save_to(config_path)?;
    println!("Token cleared");
    Ok(())
}

pub fn show(config: &Config) -> Result<()> {
    match config.token() {
        Some(token) => println!("{}", mask(token)),
        None => println!("No token saved"),
    }
    Ok(())
}

/// All but the last four characters hidden
fn mask(token: &str) -> String {
    let count = token.chars().count();
    let visible: String = token.chars().skip(count.saturating_sub(4)).collect();
    format!("{}{}", "*".repeat(count.saturating_sub(4)), visible)
}
