//! Allocation command implementation.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use folio_analytics::bucketing::{calculate_allocation, AllocationSlice};
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::read_holdings;
use crate::output::{fmt_dec, print_header, print_json, print_output};
use crate::settings::Settings;

/// Arguments for the allocation command.
#[derive(Args, Debug)]
pub struct AllocationArgs {
    /// Holdings JSON file (`-` for stdin)
    #[arg(long, value_name = "FILE")]
    pub holdings: PathBuf,
}

#[derive(Debug, Serialize, Tabled)]
struct SliceRow {
    #[tabled(rename = "Group")]
    group: String,
    #[tabled(rename = "Bucket")]
    bucket: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Weight %")]
    weight: String,
}

impl SliceRow {
    fn new(group: &str, bucket: String, slice: &AllocationSlice, precision: u32) -> Self {
        Self {
            group: group.to_string(),
            bucket,
            value: fmt_dec(slice.value, precision),
            weight: fmt_dec(slice.percentage, precision),
        }
    }
}

/// Execute the allocation command.
pub fn execute(args: AllocationArgs, settings: &Settings) -> Result<()> {
    let holdings = read_holdings(&args.holdings)?;
    let alloc = calculate_allocation(&holdings, &settings.analytics)?;
    let precision = settings.precision;

    let by_type: Vec<_> = alloc
        .by_asset_type
        .iter()
        .map(|(t, s)| SliceRow::new("asset_type", t.label().to_string(), s, precision))
        .collect();
    let by_currency: Vec<_> = alloc
        .by_currency
        .iter()
        .map(|(c, s)| SliceRow::new("currency", c.clone(), s, precision))
        .collect();

    match settings.format {
        OutputFormat::Json => print_json(&alloc)?,
        OutputFormat::Minimal => println!("{}", fmt_dec(alloc.total_value, precision)),
        OutputFormat::Csv => {
            let rows: Vec<_> = by_type.into_iter().chain(by_currency).collect();
            print_output(&rows, OutputFormat::Csv)?;
        }
        OutputFormat::Table => {
            if settings.decorated() {
                print_header("Allocation by Asset Type");
            }
            print_output(&by_type, OutputFormat::Table)?;
            if settings.decorated() {
                print_header("Allocation by Currency");
            }
            print_output(&by_currency, OutputFormat::Table)?;
        }
    }

    Ok(())
}
