use regex::Regex;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::order::{OrderTotals, MIN_QUANTITY};

pub use crate::utils::formatting::format_currency;

lazy_static::lazy_static! {
    static ref LEADING_INTEGER_REGEX: Regex = Regex::new(r"^\s*([+-]?)([0-9]+)").unwrap();
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceParseError {
    #[error("Price '{raw}' does not start with a number")]
    NotNumeric { raw: String },

    #[error("Price '{raw}' is negative")]
    Negative { raw: String },

    #[error("Price '{raw}' is too large")]
    OutOfRange { raw: String },
}

/// Parse the leading integer of `raw`, ignoring anything after the digits.
pub fn try_parse_price(raw: &str) -> Result<u64, PriceParseError> {
    let captures = LEADING_INTEGER_REGEX
        .captures(raw)
        .ok_or_else(|| PriceParseError::NotNumeric {
            raw: raw.to_string(),
        })?;

    let digits = &captures[2];
    if &captures[1] == "-" && digits.bytes().any(|b| b != b'0') {
        return Err(PriceParseError::Negative {
            raw: raw.to_string(),
        });
    }

    if captures[0].len() < raw.len() {
        debug!("Price '{}': ignoring trailing characters after '{}'", raw, digits);
    }

    digits.parse::<u64>().map_err(|_| PriceParseError::OutOfRange {
        raw: raw.to_string(),
    })
}

/// Lenient price parse. Anything that cannot be read as a non-negative
/// integer becomes 0.
pub fn parse_price(raw: &str) -> u64 {
    match try_parse_price(raw) {
        Ok(price) => price,
        Err(e) => {
            warn!("{}, falling back to 0", e);
            0
        }
    }
}

pub fn increment_quantity(quantity: u32) -> u32 {
    quantity.saturating_add(1)
}

pub fn decrement_quantity(quantity: u32) -> u32 {
    quantity.saturating_sub(1).max(MIN_QUANTITY)
}

pub fn compute_totals(unit_price: u64, quantity: u32, delivery_fee: u64) -> OrderTotals {
    let line_total = unit_price.saturating_mul(u64::from(quantity));
    OrderTotals {
        line_total,
        grand_total: line_total.saturating_add(delivery_fee),
    }
}

/// Stepper value. Never drops below one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityState(u32);

impl QuantityState {
    pub fn new() -> Self {
        Self(MIN_QUANTITY)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    pub fn increment(self) -> Self {
        Self(increment_quantity(self.0))
    }

    pub fn decrement(self) -> Self {
        Self(decrement_quantity(self.0))
    }
}

impl Default for QuantityState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order::DELIVERY_FEE;

    #[test]
    fn test_parse_plain_price() {
        assert_eq!(parse_price("38000"), 38_000);
        assert_eq!(parse_price("0"), 0);
    }

    #[test]
    fn test_parse_truncates_trailing_characters() {
        assert_eq!(parse_price("38000abc"), 38_000);
        assert_eq!(parse_price("3.5"), 3);
        assert_eq!(parse_price("12 000"), 12);
    }

    #[test]
    fn test_parse_skips_leading_whitespace_and_plus() {
        assert_eq!(parse_price("  42"), 42);
        assert_eq!(parse_price("+42"), 42);
        assert_eq!(parse_price("\t7\n"), 7);
    }

    #[test]
    fn test_parse_non_numeric_falls_back_to_zero() {
        assert_eq!(parse_price("abc"), 0);
        assert_eq!(parse_price(""), 0);
        assert_eq!(parse_price("Rp 38000"), 0);
        assert_eq!(
            try_parse_price("abc"),
            Err(PriceParseError::NotNumeric {
                raw: "abc".to_string()
            })
        );
    }

    #[test]
    fn test_parse_negative_falls_back_to_zero() {
        assert_eq!(parse_price("-5"), 0);
        assert!(matches!(
            try_parse_price("-5"),
            Err(PriceParseError::Negative { .. })
        ));
        assert_eq!(try_parse_price("-0"), Ok(0));
    }

    #[test]
    fn test_parse_out_of_range_falls_back_to_zero() {
        let raw = "99999999999999999999999";
        assert!(matches!(
            try_parse_price(raw),
            Err(PriceParseError::OutOfRange { .. })
        ));
        assert_eq!(parse_price(raw), 0);
    }

    #[test]
    fn test_parse_ignores_non_ascii_digits() {
        assert_eq!(parse_price("٣٨٠٠٠"), 0);
    }

    #[test]
    fn test_increment_then_decrement_round_trips() {
        for q in [1, 2, 3, 10, 999] {
            assert_eq!(decrement_quantity(increment_quantity(q)), q);
        }
    }

    #[test]
    fn test_decrement_floor() {
        assert_eq!(decrement_quantity(1), 1);
        assert_eq!(decrement_quantity(0), 1);
        assert_eq!(decrement_quantity(2), 1);
    }

    #[test]
    fn test_increment_saturates() {
        assert_eq!(increment_quantity(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_compute_totals() {
        let totals = compute_totals(38_000, 1, DELIVERY_FEE);
        assert_eq!(totals.line_total, 38_000);
        assert_eq!(totals.grand_total, 48_000);

        let totals = compute_totals(38_000, 3, DELIVERY_FEE);
        assert_eq!(totals.line_total, 114_000);
        assert_eq!(totals.grand_total, 124_000);
    }

    #[test]
    fn test_compute_totals_zero_price() {
        let totals = compute_totals(0, 5, DELIVERY_FEE);
        assert_eq!(totals.line_total, 0);
        assert_eq!(totals.grand_total, DELIVERY_FEE);
    }

    #[test]
    fn test_compute_totals_saturates() {
        let totals = compute_totals(u64::MAX, 2, DELIVERY_FEE);
        assert_eq!(totals.line_total, u64::MAX);
        assert_eq!(totals.grand_total, u64::MAX);
    }

    #[test]
    fn test_quantity_state_transitions() {
        let state = QuantityState::default();
        assert_eq!(state.value(), 1);
        assert_eq!(state.decrement().value(), 1);

        let state = state.increment().increment();
        assert_eq!(state.value(), 3);
        assert_eq!(state.decrement().value(), 2);
    }
}
