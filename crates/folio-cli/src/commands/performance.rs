//! Performance command implementation.
//!
//! Values each holding and reports gain/loss per holding and in total.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use folio_analytics::analytics::{calculate_performance, HoldingPerformance, PerformanceMetrics};
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::read_holdings;
use crate::output::{
    fmt_change, fmt_change_percent, fmt_dec, fmt_opt, print_header, print_json, print_output,
    print_warning, KeyValue,
};
use crate::settings::Settings;

/// Arguments for the performance command.
#[derive(Args, Debug)]
pub struct PerformanceArgs {
    /// Holdings JSON file (`-` for stdin)
    #[arg(long, value_name = "FILE")]
    pub holdings: PathBuf,
}

/// One row of the per-holding table.
#[derive(Debug, Serialize, Tabled)]
struct HoldingRow {
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Type")]
    asset_type: String,
    #[tabled(rename = "Qty")]
    quantity: String,
    #[tabled(rename = "Avg Cost")]
    average_cost: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Cost Basis")]
    cost_basis: String,
    #[tabled(rename = "Gain/Loss")]
    gain_loss: String,
    #[tabled(rename = "Gain/Loss %")]
    gain_loss_percent: String,
}

impl HoldingRow {
    fn new(h: &HoldingPerformance, precision: u32, styled: bool) -> Self {
        let (gain_loss, gain_loss_percent) = if styled {
            (
                fmt_change(h.gain_loss, precision),
                fmt_change_percent(h.gain_loss_percent, precision),
            )
        } else {
            (
                fmt_dec(h.gain_loss, precision),
                fmt_dec(h.gain_loss_percent, precision),
            )
        };
        Self {
            symbol: h.symbol.clone(),
            asset_type: h.asset_type.label().to_string(),
            quantity: h.quantity.normalize().to_string(),
            average_cost: fmt_dec(h.average_cost, precision),
            price: fmt_opt(h.current_price, precision),
            value: fmt_dec(h.current_value, precision),
            cost_basis: fmt_dec(h.cost_basis, precision),
            gain_loss,
            gain_loss_percent,
        }
    }
}

fn totals(metrics: &PerformanceMetrics, precision: u32) -> Vec<KeyValue> {
    vec![
        KeyValue::from_decimal("Total Value", metrics.total_value, precision),
        KeyValue::from_decimal("Total Cost", metrics.total_cost, precision),
        KeyValue::new(
            "Total Gain/Loss",
            fmt_change(metrics.total_gain_loss, precision),
        ),
        KeyValue::new(
            "Total Gain/Loss %",
            fmt_change_percent(metrics.total_gain_loss_percent, precision),
        ),
        KeyValue::new("Holdings", metrics.holding_count().to_string()),
    ]
}

/// Execute the performance command.
pub fn execute(args: PerformanceArgs, settings: &Settings) -> Result<()> {
    let holdings = read_holdings(&args.holdings)?;
    let metrics = calculate_performance(&holdings, &settings.analytics)?;
    let precision = settings.precision;

    match settings.format {
        OutputFormat::Json => print_json(&metrics)?,
        OutputFormat::Minimal => println!("{}", fmt_dec(metrics.total_value, precision)),
        OutputFormat::Csv => {
            let rows: Vec<_> = metrics
                .holdings
                .iter()
                .map(|h| HoldingRow::new(h, precision, false))
                .collect();
            print_output(&rows, OutputFormat::Csv)?;
        }
        OutputFormat::Table => {
            let rows: Vec<_> = metrics
                .holdings
                .iter()
                .map(|h| HoldingRow::new(h, precision, true))
                .collect();
            if settings.decorated() {
                print_header("Holdings");
            }
            print_output(&rows, OutputFormat::Table)?;
            if settings.decorated() {
                print_header("Portfolio Totals");
            }
            print_output(&totals(&metrics, precision), OutputFormat::Table)?;
            if metrics.stale_holdings > 0 && !settings.quiet {
                print_warning(&format!(
                    "{} holding(s) have no current price and are valued at 0",
                    metrics.stale_holdings
                ));
            }
        }
    }

    Ok(())
}
