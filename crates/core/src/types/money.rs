//! Money formatting for Brazilian Real amounts.
//!
//! Prices are plain [`Decimal`] values in BRL units. These helpers render
//! them for display (`R$ 1.234,56`) and for payment payloads (`1234.56`).

use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount with exactly two decimal digits and a `.` separator.
///
/// This is the wire form used by payment payloads: `12.5` becomes `"12.50"`,
/// `5` becomes `"5.00"`. Amounts with more precision are rounded half away
/// from zero.
#[must_use]
pub fn two_decimals(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Format an amount the Brazilian way: `R$ 1.234,56`.
///
/// Thousands are grouped with `.` and the decimal separator is `,`.
#[must_use]
pub fn format_brl(amount: Decimal) -> String {
    let fixed = two_decimals(amount);
    let (raw_int, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let (sign, digits) = raw_int
        .strip_prefix('-')
        .map_or(("", raw_int), |rest| ("-", rest));

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    format!("{sign}R$ {grouped},{frac}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_two_decimals_pads_zeroes() {
        assert_eq!(two_decimals(Decimal::new(5, 0)), "5.00");
        assert_eq!(two_decimals(Decimal::new(55, 1)), "5.50");
        assert_eq!(two_decimals(Decimal::new(555, 2)), "5.55");
        assert_eq!(two_decimals(Decimal::new(125, 1)), "12.50");
    }

    #[test]
    fn test_two_decimals_rounds_half_up() {
        assert_eq!(two_decimals(Decimal::new(12_345, 3)), "12.35");
        assert_eq!(two_decimals(Decimal::new(12_344, 3)), "12.34");
    }

    #[test]
    fn test_format_brl_simple() {
        assert_eq!(format_brl(Decimal::new(1250, 2)), "R$ 12,50");
        assert_eq!(format_brl(Decimal::ZERO), "R$ 0,00");
        assert_eq!(format_brl(Decimal::new(85, 1)), "R$ 8,50");
    }

    #[test]
    fn test_format_brl_groups_thousands() {
        assert_eq!(format_brl(Decimal::new(123_456, 2)), "R$ 1.234,56");
        assert_eq!(format_brl(Decimal::new(100_000_000, 2)), "R$ 1.000.000,00");
    }

    #[test]
    fn test_format_brl_negative() {
        assert_eq!(format_brl(Decimal::new(-1250, 2)), "-R$ 12,50");
    }
}
