//! Folio CLI - Command-line interface for portfolio analytics.
//!
//! Input records are JSON files produced by the data layer; pass `-` to read
//! from stdin.
//!
//! # Usage
//!
//! ```bash
//! # Portfolio performance
//! folio performance --holdings holdings.json
//!
//! # Diversification as JSON
//! folio diversification --holdings holdings.json --format json
//!
//! # Normalize a price history, showing the latest 20 bars
//! folio history --file aapl.json --period 6mo --limit 20
//!
//! # Rebuild positions from transactions
//! folio replay --transactions transactions.json
//!
//! # Configure defaults
//! folio config set default_format json
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;
mod settings;

use cli::{Cli, Commands};
use settings::{config_path, ConfigStore, Settings};

fn init_tracing(verbose: bool, quiet: bool) {
    let default_directive = if verbose {
        "folio=debug"
    } else if quiet {
        "folio=error"
    } else {
        "folio=info"
    };

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let path = config_path(cli.config_dir.as_deref())?;
    let store = ConfigStore::load(&path)?;
    let settings = Settings::resolve(&store, cli.format, cli.quiet)?;
    if !settings.use_colors {
        colored::control::set_override(false);
    }
    tracing::debug!(config = %path.display(), format = ?settings.format, "resolved settings");

    match cli.command {
        Commands::Performance(args) => commands::performance::execute(args, &settings)?,
        Commands::Diversification(args) => commands::diversification::execute(args, &settings)?,
        Commands::Allocation(args) => commands::allocation::execute(args, &settings)?,
        Commands::Summary(args) => commands::summary::execute(args, &settings)?,
        Commands::History(args) => commands::history::execute(args, &settings)?,
        Commands::Replay(args) => commands::replay::execute(args, &settings)?,
        Commands::Refresh(args) => commands::refresh::execute(args, &settings)?,
        Commands::Config(args) => commands::config::execute(args, &path, &settings)?,
    }

    Ok(())
}
