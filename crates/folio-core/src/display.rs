//! Display formatting for monetary values and changes.
//!
//! Formatting only: no currency conversion happens here.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a price or value change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeDirection {
    /// Positive change
    Up,
    /// Negative change
    Down,
    /// No change
    Flat,
}

impl ChangeDirection {
    /// Classifies a change by its sign.
    #[must_use]
    pub fn of(change: Decimal) -> Self {
        if change > Decimal::ZERO {
            ChangeDirection::Up
        } else if change < Decimal::ZERO {
            ChangeDirection::Down
        } else {
            ChangeDirection::Flat
        }
    }

    /// Returns an arrow glyph for terminal output.
    #[must_use]
    pub fn arrow(&self) -> &'static str {
        match self {
            ChangeDirection::Up => "▲",
            ChangeDirection::Down => "▼",
            ChangeDirection::Flat => "-",
        }
    }
}

impl fmt::Display for ChangeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChangeDirection::Up => "up",
            ChangeDirection::Down => "down",
            ChangeDirection::Flat => "flat",
        };
        write!(f, "{name}")
    }
}

/// Returns the display symbol for a currency code, or the code itself.
#[must_use]
pub fn currency_symbol(code: &str) -> &str {
    match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" | "CNY" => "¥",
        "INR" => "₹",
        "CAD" => "C$",
        "AUD" => "A$",
        "HKD" => "HK$",
        _ => code,
    }
}

/// Formats a percentage with an explicit sign and `dp` decimals.
///
/// ```rust
/// use folio_core::display::format_signed_percent;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_signed_percent(dec!(2), 2), "+2.00%");
/// assert_eq!(format_signed_percent(dec!(-1.456), 2), "-1.46%");
/// assert_eq!(format_signed_percent(dec!(0), 2), "0.00%");
/// ```
#[must_use]
pub fn format_signed_percent(value: Decimal, dp: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        // drop the sign of a negative zero
        rounded = Decimal::ZERO;
    }
    let sign = if rounded > Decimal::ZERO { "+" } else { "" };
    format!("{sign}{rounded:.prec$}%", prec = dp as usize)
}

/// Formats a monetary amount with a currency symbol, thousands separators,
/// and two decimals.
///
/// ```rust
/// use folio_core::display::format_money;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_money(dec!(1234567.891), "USD"), "$1,234,567.89");
/// assert_eq!(format_money(dec!(-42.5), "EUR"), "-€42.50");
/// assert_eq!(format_money(dec!(10), "CHF"), "CHF 10.00");
/// ```
#[must_use]
pub fn format_money(value: Decimal, currency: &str) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let digits = format!("{:.2}", rounded.abs());
    let (whole, frac) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let symbol = currency_symbol(currency);
    let separator = if symbol == currency { " " } else { "" };

    format!("{sign}{symbol}{separator}{}.{frac}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_change_direction() {
        assert_eq!(ChangeDirection::of(dec!(0.01)), ChangeDirection::Up);
        assert_eq!(ChangeDirection::of(dec!(-3)), ChangeDirection::Down);
        assert_eq!(ChangeDirection::of(Decimal::ZERO), ChangeDirection::Flat);
        assert_eq!(ChangeDirection::Down.to_string(), "down");
    }

    #[test]
    fn test_signed_percent() {
        assert_eq!(format_signed_percent(dec!(3.3783783), 2), "+3.38%");
        assert_eq!(format_signed_percent(dec!(-0.004), 2), "0.00%");
        assert_eq!(format_signed_percent(dec!(12.5), 1), "+12.5%");
    }

    #[test]
    fn test_money_grouping() {
        assert_eq!(format_money(dec!(0), "USD"), "$0.00");
        assert_eq!(format_money(dec!(999.999), "USD"), "$1,000.00");
        assert_eq!(format_money(dec!(100000), "GBP"), "£100,000.00");
        assert_eq!(format_money(dec!(-0.001), "USD"), "$0.00");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }
}
