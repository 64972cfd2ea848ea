//! History command implementation.
//!
//! Normalizes a fetched price history into latest price, daily and period
//! change, and the most recent bars.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use folio_analytics::history::{normalize_series, HistoricalRequest, HistoricalSeries, PriceHistory};
use folio_core::display::format_money;
use folio_core::types::HistoricalBar;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::read_json;
use crate::output::{
    fmt_change, fmt_change_percent, fmt_dec, print_header, print_info, print_json, print_output,
    KeyValue,
};
use crate::settings::Settings;

/// Arguments for the history command.
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Price history JSON file (`-` for stdin)
    #[arg(long, value_name = "FILE")]
    pub file: PathBuf,

    /// Override the symbol recorded in the file
    #[arg(short, long)]
    pub symbol: Option<String>,

    /// Override the period (1d, 5d, 1mo, 3mo, 6mo, 1y, 2y, 5y, 10y, ytd, max)
    #[arg(short, long)]
    pub period: Option<String>,

    /// Override the interval (1d, 1wk, 1mo)
    #[arg(short, long)]
    pub interval: Option<String>,

    /// Number of recent bars to show (defaults to `display_limit`)
    #[arg(short, long)]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Tabled)]
struct BarRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Open")]
    open: String,
    #[tabled(rename = "High")]
    high: String,
    #[tabled(rename = "Low")]
    low: String,
    #[tabled(rename = "Close")]
    close: String,
    #[tabled(rename = "Volume")]
    volume: u64,
}

impl BarRow {
    fn new(bar: &HistoricalBar, precision: u32) -> Self {
        Self {
            date: bar.date.format("%Y-%m-%d").to_string(),
            open: fmt_dec(bar.open, precision),
            high: fmt_dec(bar.high, precision),
            low: fmt_dec(bar.low, precision),
            close: fmt_dec(bar.close, precision),
            volume: bar.volume,
        }
    }
}

fn overview(series: &HistoricalSeries, precision: u32) -> Vec<KeyValue> {
    let mut rows = vec![
        KeyValue::new("Symbol", series.symbol.clone()),
        KeyValue::new("Name", series.name.clone()),
        KeyValue::new(
            "Period",
            format!("{} ({})", series.period.label(), series.interval.label()),
        ),
        KeyValue::new(
            "Current Price",
            format_money(series.current_price, &series.currency),
        ),
        KeyValue::new(
            "Daily Change",
            format!(
                "{} ({})",
                fmt_change(series.daily_change, precision),
                fmt_change_percent(series.daily_change_percent, precision)
            ),
        ),
        KeyValue::new(
            "Period Change",
            format!(
                "{} ({})",
                fmt_change(series.period_change, precision),
                fmt_change_percent(series.period_change_percent, precision)
            ),
        ),
        KeyValue::new("Data Points", series.data_points.to_string()),
    ];
    if let Some(exchange) = &series.exchange {
        rows.insert(2, KeyValue::new("Exchange", exchange.clone()));
    }
    rows
}

/// Applies command-line overrides to the history's request metadata.
fn apply_overrides(mut history: PriceHistory, args: &HistoryArgs) -> Result<PriceHistory> {
    let request = HistoricalRequest::parse(
        args.symbol.as_deref().unwrap_or(&history.symbol),
        args.period.as_deref().unwrap_or(history.period.token()),
        args.interval.as_deref().unwrap_or(history.interval.token()),
    )?;
    history.symbol = request.symbol;
    history.period = request.period;
    history.interval = request.interval;
    Ok(history)
}

/// Execute the history command.
pub fn execute(args: HistoryArgs, settings: &Settings) -> Result<()> {
    let history: PriceHistory = read_json(&args.file)?;
    let history = apply_overrides(history, &args)?;

    let mut config = settings.analytics.clone();
    if let Some(limit) = args.limit {
        config = config.with_display_limit(limit);
    }

    let series = normalize_series(&history, &config)?;
    let precision = settings.precision;

    match settings.format {
        OutputFormat::Json => print_json(&series)?,
        OutputFormat::Minimal => println!("{}", fmt_dec(series.current_price, precision)),
        OutputFormat::Csv => {
            let rows: Vec<_> = series
                .display_bars
                .iter()
                .map(|b| BarRow::new(b, precision))
                .collect();
            print_output(&rows, OutputFormat::Csv)?;
        }
        OutputFormat::Table => {
            if settings.decorated() {
                print_header(&format!("{} Price History", series.symbol));
            }
            print_output(&overview(&series, precision), OutputFormat::Table)?;

            let rows: Vec<_> = series
                .display_bars
                .iter()
                .map(|b| BarRow::new(b, precision))
                .collect();
            if settings.decorated() {
                print_header("Recent Prices");
            }
            print_output(&rows, OutputFormat::Table)?;

            if let Some(notice) = series.display_notice() {
                if !settings.quiet {
                    print_info(&notice);
                }
            }
        }
    }

    Ok(())
}
