//! Zero-safe division and overflow-checked totals.
//!
//! Every percentage in Folio goes through [`ratio`] or [`percentage`]. A zero
//! denominator (zero cost basis, zero portfolio value, zero prior close)
//! yields the caller's default instead of an error, `NaN`, or a panic.

use crate::error::{FolioError, FolioResult};
use rust_decimal::Decimal;

/// Divides `numerator` by `denominator`, returning `default` when the
/// denominator is zero or the quotient does not fit in a `Decimal`.
///
/// # Example
///
/// ```rust
/// use folio_core::ratio;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(ratio(dec!(3), dec!(4), dec!(0)), dec!(0.75));
/// assert_eq!(ratio(dec!(3), dec!(0), dec!(0)), dec!(0));
/// ```
#[must_use]
pub fn ratio(numerator: Decimal, denominator: Decimal, default: Decimal) -> Decimal {
    if denominator.is_zero() {
        return default;
    }
    numerator.checked_div(denominator).unwrap_or(default)
}

/// Expresses `part` as a percentage of `whole` (0-100 scale), or zero when
/// `whole` is zero.
///
/// # Example
///
/// ```rust
/// use folio_core::percentage;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(percentage(dec!(25), dec!(200)), dec!(12.5));
/// assert_eq!(percentage(dec!(25), dec!(0)), dec!(0));
/// ```
#[must_use]
pub fn percentage(part: Decimal, whole: Decimal) -> Decimal {
    let share = ratio(part, whole, Decimal::ZERO);
    share
        .checked_mul(Decimal::ONE_HUNDRED)
        .unwrap_or(Decimal::ZERO)
}

/// Relative change from `from` to `to` in percent, or zero when `from` is
/// zero.
#[must_use]
pub fn percent_change(from: Decimal, to: Decimal) -> Decimal {
    percentage(to - from, from)
}

/// Sums `values`, failing instead of panicking when the total overflows.
///
/// # Errors
///
/// Returns [`FolioError::Overflow`] naming `operation`.
pub fn checked_total(
    values: impl IntoIterator<Item = Decimal>,
    operation: &str,
) -> FolioResult<Decimal> {
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(v))
        .ok_or_else(|| FolioError::overflow(operation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_ratio_basic() {
        assert_eq!(ratio(dec!(1), dec!(8), dec!(0)), dec!(0.125));
        assert_eq!(ratio(dec!(-6), dec!(3), dec!(0)), dec!(-2));
    }

    #[test]
    fn test_ratio_zero_denominator_uses_default() {
        assert_eq!(ratio(dec!(10), Decimal::ZERO, dec!(0)), dec!(0));
        assert_eq!(ratio(dec!(10), Decimal::ZERO, dec!(-1)), dec!(-1));
        assert_eq!(ratio(Decimal::ZERO, Decimal::ZERO, dec!(0)), dec!(0));
    }

    #[test]
    fn test_ratio_overflow_uses_default() {
        let tiny = Decimal::new(1, 28);
        assert_eq!(ratio(Decimal::MAX, tiny, dec!(0)), dec!(0));
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(dec!(50), dec!(200)), dec!(25));
        assert_eq!(percentage(dec!(0), dec!(200)), dec!(0));
        assert_eq!(percentage(dec!(50), dec!(0)), dec!(0));
    }

    #[test]
    fn test_percent_change() {
        assert_eq!(percent_change(dec!(150), dec!(153)), dec!(2));
        assert_eq!(percent_change(dec!(100), dec!(90)), dec!(-10));
        assert_eq!(percent_change(dec!(0), dec!(90)), dec!(0));
    }

    #[test]
    fn test_checked_total() {
        assert_eq!(checked_total([dec!(1.5), dec!(2.5)], "sum"), Ok(dec!(4)));
        assert_eq!(checked_total(Vec::new(), "sum"), Ok(Decimal::ZERO));

        let err = checked_total([Decimal::MAX, Decimal::ONE], "total value").unwrap_err();
        assert_eq!(err, FolioError::overflow("total value"));
    }

    #[test]
    fn test_percent_change_three_decimals() {
        let pct = percent_change(dec!(148), dec!(153));
        assert!((pct - dec!(3.378)).abs() < dec!(0.001));
    }
}
