//! Configuration inspection and editing

use url::Url;

use crate::cli::commands::ConfigCommand;
use crate::core::config::Config;
use crate::error::{Result, StarviewError};

/// Handle `config` subcommands
pub fn handle_config(command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            let config = Config::load()?;
            println!("base_url = {}", config.base_url);
            println!("request_timeout_secs = {}", config.request_timeout_secs);
        }
        ConfigCommand::Path => {
            println!("{}", Config::config_path()?.display());
        }
        ConfigCommand::SetUrl { url } => {
            // Reject unparseable URLs before they reach the config file
            Url::parse(&url)
                .map_err(|e| StarviewError::InvalidBaseUrl(format!("{}: {}", url, e)))?;

            let mut config = Config::load()?;
            config.base_url = url;
            config.save()?;
            println!("Base URL updated.");
        }
    }

    Ok(())
}
