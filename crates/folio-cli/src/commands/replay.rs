//! Replay command implementation.
//!
//! Rebuilds open positions from a transaction log.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use folio_analytics::ledger::{replay_transactions, PositionKey, PositionState};
use folio_core::types::Transaction;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::read_json;
use crate::output::{fmt_dec, print_header, print_json, print_output};
use crate::settings::Settings;

/// Arguments for the replay command.
#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// Transactions JSON file (`-` for stdin)
    #[arg(long, value_name = "FILE")]
    pub transactions: PathBuf,

    /// Only replay transactions of this portfolio
    #[arg(long)]
    pub portfolio: Option<u64>,
}

#[derive(Debug, Serialize, Tabled)]
struct PositionRow {
    #[tabled(rename = "Portfolio")]
    portfolio_id: u64,
    #[tabled(rename = "Asset")]
    asset_id: u64,
    #[tabled(rename = "Quantity")]
    quantity: String,
    #[tabled(rename = "Avg Cost")]
    average_cost: String,
    #[tabled(rename = "Cost Basis")]
    cost_basis: String,
}

#[derive(Debug, Serialize)]
struct PositionRecord {
    #[serde(flatten)]
    key: PositionKey,
    #[serde(flatten)]
    state: PositionState,
}

/// Execute the replay command.
pub fn execute(args: ReplayArgs, settings: &Settings) -> Result<()> {
    let mut transactions: Vec<Transaction> = read_json(&args.transactions)?;
    if let Some(portfolio_id) = args.portfolio {
        transactions.retain(|t| t.portfolio_id == portfolio_id);
    }

    let positions = replay_transactions(&transactions)?;
    let p = settings.precision;

    match settings.format {
        OutputFormat::Json => {
            let records: Vec<_> = positions
                .iter()
                .map(|(key, state)| PositionRecord {
                    key: *key,
                    state: *state,
                })
                .collect();
            print_json(&records)?;
        }
        OutputFormat::Minimal => println!("{}", positions.len()),
        OutputFormat::Csv | OutputFormat::Table => {
            let rows: Vec<_> = positions
                .iter()
                .map(|(key, state)| PositionRow {
                    portfolio_id: key.portfolio_id,
                    asset_id: key.asset_id,
                    quantity: state.quantity.normalize().to_string(),
                    average_cost: fmt_dec(state.average_cost, p),
                    cost_basis: fmt_dec(state.cost_basis(), p),
                })
                .collect();
            if settings.decorated() {
                print_header(&format!(
                    "Open Positions ({} transactions replayed)",
                    transactions.len()
                ));
            }
            print_output(&rows, settings.format)?;
        }
    }

    Ok(())
}
