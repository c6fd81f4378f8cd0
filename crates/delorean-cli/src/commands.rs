use super::args::{Cli, Commands, TokenCommand};
use super::handlers;
use crate::config::{Config, resolve_data_dir};
use crate::logging;
use anyhow::Result;
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let config_path = Config::path_in(&data_dir);
    let config = Config::load_from(&config_path)?;
    debug!(config = %config_path.display(), "loaded config");

    match cli.command {
        Commands::Report(args) => handlers::report::handle(&config, args),
        Commands::Periods(args) => handlers::periods::handle(&config, args),
        Commands::Fetch(args) => handlers::fetch::handle(&config, args),
        Commands::Token { command } => match command {
            TokenCommand::Set { token } => handlers::token::set(config, &config_path, &token),
            TokenCommand::Clear => handlers::token::clear(config, &config_path),
            TokenCommand::Show => handlers::token::show(&config),
        },
    }
}
