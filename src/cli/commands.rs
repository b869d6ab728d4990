//! CLI command definitions using clap
//!
//! Defines the command structure for the `sv` CLI tool.

use clap::{Parser, Subcommand};

/// starview - Star Wars people browser TUI
///
/// A terminal application for browsing the paginated people index of the
/// Star Wars API. Run without arguments to launch the TUI mode.
#[derive(Parser, Debug)]
#[command(name = "starview", version, about, long_about = None)]
pub struct Cli {
    /// Override the API base URL for this invocation
    #[arg(long, global = true, env = "STARVIEW_BASE_URL")]
    pub base_url: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List people to stdout without entering the TUI
    List(ListArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// One-shot listing arguments
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Page to fetch
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Walk every page until the API reports no further results
    #[arg(long, conflicts_with = "page")]
    pub all: bool,
}

/// Configuration commands
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the resolved configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Set the API base URL
    SetUrl {
        /// New base URL, e.g. https://swapi.dev/api/people
        url: String,
    },
}
