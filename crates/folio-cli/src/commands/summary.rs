//! Summary command implementation.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use folio_analytics::analytics::calculate_position_summary;

use crate::cli::OutputFormat;
use crate::commands::read_holdings;
use crate::output::{print_header, print_json, print_output, KeyValue};
use crate::settings::Settings;

/// Arguments for the summary command.
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Holdings JSON file (`-` for stdin)
    #[arg(long, value_name = "FILE")]
    pub holdings: PathBuf,
}

/// Execute the summary command.
pub fn execute(args: SummaryArgs, settings: &Settings) -> Result<()> {
    let holdings = read_holdings(&args.holdings)?;
    let summary = calculate_position_summary(&holdings, &settings.analytics)?;
    let p = settings.precision;

    if settings.format == OutputFormat::Json {
        return print_json(&summary);
    }

    let stats = &summary.price_statistics;
    let results = vec![
        KeyValue::new("Total Positions", summary.total_positions.to_string()),
        KeyValue::new("Priced Positions", summary.priced_positions.to_string()),
        KeyValue::from_decimal("Market Value", summary.total_market_value, p),
        KeyValue::from_decimal("Cost Basis", summary.total_cost_basis, p),
        KeyValue::from_decimal("Unrealized Gain/Loss", summary.unrealized_gain_loss, p),
        KeyValue::from_percent(
            "Unrealized Gain/Loss %",
            summary.unrealized_gain_loss_percent,
            p,
        ),
        KeyValue::from_decimal("Max Price", stats.max, p),
        KeyValue::from_decimal("Min Price", stats.min, p),
        KeyValue::from_decimal("Mean Price", stats.mean, p),
    ];

    if settings.format == OutputFormat::Minimal {
        // headline is the market value
        println!("{}", results[2].value);
        return Ok(());
    }
    if settings.decorated() {
        print_header("Position Summary");
    }
    print_output(&results, settings.format)
}
