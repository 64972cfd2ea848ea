//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{
    AllocationArgs, ConfigArgs, DiversificationArgs, HistoryArgs, PerformanceArgs, RefreshArgs,
    ReplayArgs, SummaryArgs,
};

/// Folio - Portfolio performance and price history analytics CLI
#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the configured `default_format`)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log analytics details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding config.json
    #[arg(long, global = true, env = "FOLIO_CONFIG_DIR", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Value holdings and report gain/loss per holding and in total
    Performance(PerformanceArgs),

    /// Break portfolio value down by asset type and by asset
    Diversification(DiversificationArgs),

    /// Allocate portfolio value by asset type and by currency
    Allocation(AllocationArgs),

    /// Summarize positions and price statistics
    Summary(SummaryArgs),

    /// Normalize a price history: latest price, changes, recent bars
    History(HistoryArgs),

    /// Rebuild positions from a transaction log
    Replay(ReplayArgs),

    /// Apply quotes to assets
    Refresh(RefreshArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the headline value)
    Minimal,
}
