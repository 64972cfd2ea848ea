//! Diversification command implementation.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use folio_analytics::bucketing::{calculate_diversification, AssetWeight};
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::read_holdings;
use crate::output::{fmt_dec, print_header, print_json, print_output};
use crate::settings::Settings;

/// Arguments for the diversification command.
#[derive(Args, Debug)]
pub struct DiversificationArgs {
    /// Holdings JSON file (`-` for stdin)
    #[arg(long, value_name = "FILE")]
    pub holdings: PathBuf,

    /// Show only the largest N assets
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,
}

#[derive(Debug, Serialize, Tabled)]
struct TypeRow {
    #[tabled(rename = "Asset Type")]
    asset_type: String,
    #[tabled(rename = "Weight %")]
    weight: String,
}

#[derive(Debug, Serialize, Tabled)]
struct AssetRow {
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    asset_type: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Weight %")]
    weight: String,
}

impl AssetRow {
    fn new(w: &AssetWeight, precision: u32) -> Self {
        Self {
            symbol: w.asset.symbol.clone(),
            name: w.asset.name.clone(),
            asset_type: w.asset.asset_type.label().to_string(),
            value: fmt_dec(w.value, precision),
            weight: fmt_dec(w.percentage, precision),
        }
    }
}

/// Execute the diversification command.
pub fn execute(args: DiversificationArgs, settings: &Settings) -> Result<()> {
    let holdings = read_holdings(&args.holdings)?;
    let mut data = calculate_diversification(&holdings, &settings.analytics)?;
    if let Some(n) = args.top {
        data.by_asset.truncate(n);
    }
    let precision = settings.precision;

    let asset_rows: Vec<_> = data
        .by_asset
        .iter()
        .map(|w| AssetRow::new(w, precision))
        .collect();

    match settings.format {
        OutputFormat::Json => print_json(&data)?,
        OutputFormat::Csv => print_output(&asset_rows, OutputFormat::Csv)?,
        OutputFormat::Minimal => {
            if let Some(top) = data.by_asset.first() {
                println!(
                    "{} {}",
                    top.asset.symbol,
                    fmt_dec(top.percentage, precision),
                );
            }
        }
        OutputFormat::Table => {
            let type_rows: Vec<_> = data
                .sorted_by_weight()
                .into_iter()
                .map(|(t, w)| TypeRow {
                    asset_type: t.label().to_string(),
                    weight: fmt_dec(w, precision),
                })
                .collect();

            if settings.decorated() {
                print_header(&format!(
                    "By Asset Type (total value {})",
                    fmt_dec(data.total_value, precision)
                ));
            }
            print_output(&type_rows, OutputFormat::Table)?;
            if settings.decorated() {
                print_header("By Asset");
            }
            print_output(&asset_rows, OutputFormat::Table)?;
        }
    }

    Ok(())
}
