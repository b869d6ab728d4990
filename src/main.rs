//! starview - Star Wars people browser TUI
//!
//! A terminal application for browsing the paginated people index of the
//! Star Wars API. Run without arguments to launch the TUI, or use
//! subcommands for CLI mode.
//!
//! Available as the `sv` command.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use starview::cli::commands::{Cli, Commands};
use starview::cli::{config, list};
use starview::core::config::Config;
use starview::error::Result;
use starview::tui::App;

#[tokio::main]
async fn main() {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        // No subcommand - launch TUI mode
        None => {
            let cfg = Config::load()?.with_base_url(cli.base_url);
            run_tui(cfg).await
        }

        // One-shot listing to stdout
        Some(Commands::List(args)) => {
            let cfg = Config::load()?.with_base_url(cli.base_url);
            list::handle_list(args, cfg).await
        }

        // Config commands operate on the file directly
        Some(Commands::Config(args)) => config::handle_config(args.command),
    }
}

/// Run the TUI application
async fn run_tui(cfg: Config) -> Result<()> {
    let mut app = App::new(cfg);
    app.run().await
}
