//! Output formatting utilities.

use colored::Colorize;
use folio_core::display::format_signed_percent;
use folio_core::display::ChangeDirection;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// Prints rows in the requested format.
///
/// `Minimal` prints the first row only.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv => print_csv(data),
        OutputFormat::Minimal => print_minimal(data),
    }
}

/// Prints a whole report as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{table}");
    Ok(())
}

/// Prints data as CSV.
fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints minimal output (first row only).
fn print_minimal<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    if let Some(first) = data.first() {
        println!("{}", serde_json::to_string(first)?);
    }
    Ok(())
}

/// Formats a decimal with a fixed number of places.
pub fn fmt_dec(value: Decimal, precision: u32) -> String {
    let rounded = value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    let rounded = if rounded.is_zero() { Decimal::ZERO } else { rounded };
    format!("{:.prec$}", rounded, prec = precision as usize)
}

/// Formats an optional price, `n/a` when absent.
pub fn fmt_opt(value: Option<Decimal>, precision: u32) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| fmt_dec(v, precision))
}

/// Formats a signed percentage, colored by direction.
pub fn fmt_change_percent(value: Decimal, precision: u32) -> String {
    let text = format_signed_percent(value, precision);
    match ChangeDirection::of(value) {
        ChangeDirection::Up => text.green().to_string(),
        ChangeDirection::Down => text.red().to_string(),
        ChangeDirection::Flat => text,
    }
}

/// Formats a signed amount with a direction arrow, colored by direction.
pub fn fmt_change(value: Decimal, precision: u32) -> String {
    let direction = ChangeDirection::of(value);
    let text = format!("{} {}", direction.arrow(), fmt_dec(value, precision));
    match direction {
        ChangeDirection::Up => text.green().to_string(),
        ChangeDirection::Down => text.red().to_string(),
        ChangeDirection::Flat => text,
    }
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Prints an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a key-value pair from a decimal value.
    pub fn from_decimal(key: impl Into<String>, value: Decimal, precision: u32) -> Self {
        Self::new(key, fmt_dec(value, precision))
    }

    /// Creates a key-value pair formatted as a signed percentage.
    pub fn from_percent(key: impl Into<String>, value: Decimal, precision: u32) -> Self {
        Self::new(key, format_signed_percent(value, precision))
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}
