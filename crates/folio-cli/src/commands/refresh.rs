//! Refresh command implementation.
//!
//! Applies a quote map to a list of assets and prints the refreshed assets.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use folio_analytics::pricing::refresh_prices;
use folio_core::types::Asset;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::read_json;
use crate::output::{fmt_opt, print_header, print_json, print_output};
use crate::settings::Settings;

/// Arguments for the refresh command.
#[derive(Args, Debug)]
pub struct RefreshArgs {
    /// Assets JSON file (`-` for stdin)
    #[arg(long, value_name = "FILE")]
    pub assets: PathBuf,

    /// Quotes JSON file: an object mapping symbol to price
    #[arg(long, value_name = "FILE")]
    pub quotes: PathBuf,

    /// Quote timestamp (RFC 3339). Defaults to now.
    #[arg(long)]
    pub as_of: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Tabled)]
struct AssetRow {
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Type")]
    asset_type: String,
    #[tabled(rename = "Old Price")]
    old_price: String,
    #[tabled(rename = "New Price")]
    new_price: String,
    #[tabled(rename = "Updated")]
    updated: String,
}

/// Execute the refresh command.
pub fn execute(args: RefreshArgs, settings: &Settings) -> Result<()> {
    let assets: Vec<Asset> = read_json(&args.assets)?;
    let quotes: HashMap<String, Decimal> = read_json(&args.quotes)?;
    let as_of = args.as_of.unwrap_or_else(Utc::now);

    let refreshed = refresh_prices(&assets, &quotes, as_of);

    if settings.format == OutputFormat::Json {
        return print_json(&refreshed);
    }

    let rows: Vec<_> = assets
        .iter()
        .zip(&refreshed)
        .map(|(old, new)| AssetRow {
            symbol: new.symbol.clone(),
            asset_type: new.asset_type.label().to_string(),
            old_price: fmt_opt(old.current_price, settings.precision),
            new_price: fmt_opt(new.current_price, settings.precision),
            updated: new
                .last_updated
                .filter(|t| *t == as_of)
                .map_or_else(|| "-".to_string(), |t| t.to_rfc3339()),
        })
        .collect();

    if settings.decorated() {
        print_header("Refreshed Prices");
    }
    print_output(&rows, settings.format)
}
