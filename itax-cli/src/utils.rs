use std::sync::OnceLock;

use itax_core::RegimeId;
use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;

const LAKH: Decimal = Decimal::from_parts(100_000, 0, 0, false, 0);
const CRORE: Decimal = Decimal::from_parts(10_000_000, 0, 0, false, 0);

/// Error returned when a string cannot be parsed as a rupee amount.
#[derive(Debug, Error)]
pub enum ParseAmountError {
    #[error("empty amount")]
    Empty,

    #[error("invalid amount '{input}'")]
    Invalid { input: String },

    #[error("amount '{input}' is out of range: {source}")]
    OutOfRange {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },
}

fn amount_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^(?:₹|rs\.?|inr)?\s*([0-9][0-9,]*(?:\.[0-9]+)?)\s*(l|lac|lacs|lakh|lakhs|cr|crore|crores)?$")
            .expect("amount pattern is a valid regex")
    })
}

/// Parses a rupee amount as typed on the command line.
///
/// Accepts comma grouping in either the Indian or Western style, an optional
/// `₹`, `Rs` or `INR` prefix, and a lakh or crore suffix:
///
/// ```
/// use rust_decimal_macros::dec;
/// use itax_cli::utils::parse_amount;
///
/// assert_eq!(parse_amount("₹12,50,000").unwrap(), dec!(1250000));
/// assert_eq!(parse_amount("12.5L").unwrap(), dec!(1250000));
/// assert_eq!(parse_amount("1.2 crore").unwrap(), dec!(12000000));
/// ```
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseAmountError::Empty);
    }

    let invalid = || ParseAmountError::Invalid {
        input: s.to_string(),
    };
    let captures = amount_pattern().captures(trimmed).ok_or_else(invalid)?;

    let digits = captures[1].replace(',', "");
    let value: Decimal = digits.parse().map_err(|source| {
        tracing::warn!(input = %s, "amount out of range");
        ParseAmountError::OutOfRange {
            input: s.to_string(),
            source,
        }
    })?;

    let multiplier = match captures.get(2).map(|m| m.as_str().to_ascii_lowercase()) {
        None => Decimal::ONE,
        Some(unit) if unit.starts_with('c') => CRORE,
        Some(_) => LAKH,
    };

    value
        .checked_mul(multiplier)
        .ok_or_else(|| ParseAmountError::OutOfRange {
            input: s.to_string(),
            source: rust_decimal::Error::ExceedsMaximumPossibleValue,
        })
}

#[derive(Debug, Error)]
#[error("unknown regime '{input}', expected 'old' or 'new'")]
pub struct ParseRegimeError {
    input: String,
}

/// Parses a regime name, ignoring case and surrounding whitespace.
pub fn parse_regime(s: &str) -> Result<RegimeId, ParseRegimeError> {
    RegimeId::parse(&s.trim().to_ascii_lowercase()).ok_or_else(|| ParseRegimeError {
        input: s.to_string(),
    })
}

/// Inclusive run of slab indices, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlabRange {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Error)]
pub enum ParseSlabRangeError {
    #[error("invalid slab range '{input}', expected e.g. '2..4' or '3'")]
    Invalid { input: String },

    #[error("slab numbers in '{input}' start at 1")]
    Zero { input: String },

    #[error("slab range '{input}' ends before it starts")]
    Inverted { input: String },
}

/// Parses a slab range as numbered in the report, starting at 1.
///
/// `a..b` and `a-b` are inclusive; a single number selects one slab.
///
/// ```
/// use itax_cli::utils::{SlabRange, parse_slab_range};
///
/// assert_eq!(parse_slab_range("2..4").unwrap(), SlabRange { start: 1, end: 3 });
/// assert_eq!(parse_slab_range("5").unwrap(), SlabRange { start: 4, end: 4 });
/// ```
pub fn parse_slab_range(s: &str) -> Result<SlabRange, ParseSlabRangeError> {
    let trimmed = s.trim();
    let (first, last) = trimmed
        .split_once("..")
        .or_else(|| trimmed.split_once('-'))
        .unwrap_or((trimmed, trimmed));

    let number = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|_| ParseSlabRangeError::Invalid {
                input: s.to_string(),
            })
    };
    let (first, last) = (number(first)?, number(last)?);

    if first == 0 || last == 0 {
        return Err(ParseSlabRangeError::Zero {
            input: s.to_string(),
        });
    }
    if first > last {
        return Err(ParseSlabRangeError::Inverted {
            input: s.to_string(),
        });
    }
    Ok(SlabRange {
        start: first - 1,
        end: last - 1,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn plain_and_decimal_numbers() {
        assert_eq!(parse_amount("1250000").unwrap(), dec!(1250000));
        assert_eq!(parse_amount("99.50").unwrap(), dec!(99.50));
        assert_eq!(parse_amount("0").unwrap(), dec!(0));
    }

    #[test]
    fn accepts_indian_and_western_grouping() {
        assert_eq!(parse_amount("12,50,000").unwrap(), dec!(1250000));
        assert_eq!(parse_amount("1,250,000").unwrap(), dec!(1250000));
        assert_eq!(parse_amount("1,00,00,000.75").unwrap(), dec!(10000000.75));
    }

    #[test]
    fn currency_prefixes_and_whitespace() {
        assert_eq!(parse_amount("  ₹ 5,00,000 ").unwrap(), dec!(500000));
        assert_eq!(parse_amount("Rs. 75000").unwrap(), dec!(75000));
        assert_eq!(parse_amount("INR 1L").unwrap(), dec!(100000));
    }

    #[test]
    fn lakh_suffixes() {
        assert_eq!(parse_amount("12.5L").unwrap(), dec!(1250000));
        assert_eq!(parse_amount("3 lakh").unwrap(), dec!(300000));
        assert_eq!(parse_amount("1.5 Lakhs").unwrap(), dec!(150000));
        assert_eq!(parse_amount("2lac").unwrap(), dec!(200000));
    }

    #[test]
    fn crore_suffixes() {
        assert_eq!(parse_amount("1.2 crore").unwrap(), dec!(12000000));
        assert_eq!(parse_amount("5Cr").unwrap(), dec!(50000000));
        assert_eq!(parse_amount("2 crores").unwrap(), dec!(20000000));
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(parse_amount(""), Err(ParseAmountError::Empty)));
        assert!(matches!(parse_amount("   "), Err(ParseAmountError::Empty)));
    }

    #[test]
    fn rejects_garbage_negatives_and_unknown_units() {
        for input in ["abc", "-500000", "12.5K", "1.2.3", "₹", "L", "5 million"] {
            assert!(
                matches!(parse_amount(input), Err(ParseAmountError::Invalid { .. })),
                "{input} should be invalid"
            );
        }
    }

    #[test]
    fn overlong_numbers_are_out_of_range() {
        let err = parse_amount("99999999999999999999999999999999999").unwrap_err();

        assert!(matches!(err, ParseAmountError::OutOfRange { .. }));
    }

    #[test]
    fn suffix_that_overflows_is_out_of_range() {
        // Decimal::MAX scaled by a crore no longer fits.
        let err = parse_amount("79228162514264337593543950335 crore").unwrap_err();

        assert!(matches!(err, ParseAmountError::OutOfRange { .. }));
        assert!(err.to_string().contains("crore"));
    }

    // =========================================================================
    // parse_regime tests
    // =========================================================================

    #[test]
    fn regime_names_ignore_case_and_whitespace() {
        assert_eq!(parse_regime("old").unwrap(), RegimeId::Old);
        assert_eq!(parse_regime(" New ").unwrap(), RegimeId::New);
        assert_eq!(parse_regime("OLD").unwrap(), RegimeId::Old);
    }

    #[test]
    fn unknown_regime_is_an_error() {
        let err = parse_regime("both").unwrap_err();

        assert_eq!(err.to_string(), "unknown regime 'both', expected 'old' or 'new'");
        assert!(parse_regime("").is_err());
    }

    // =========================================================================
    // parse_slab_range tests
    // =========================================================================

    #[test]
    fn slab_ranges_are_one_based_and_inclusive() {
        assert_eq!(parse_slab_range("2..4").unwrap(), SlabRange { start: 1, end: 3 });
        assert_eq!(parse_slab_range("2-4").unwrap(), SlabRange { start: 1, end: 3 });
        assert_eq!(parse_slab_range(" 1 .. 7 ").unwrap(), SlabRange { start: 0, end: 6 });
        assert_eq!(parse_slab_range("3").unwrap(), SlabRange { start: 2, end: 2 });
    }

    #[test]
    fn slab_range_rejects_zero_inverted_and_garbage() {
        assert!(matches!(parse_slab_range("0..3"), Err(ParseSlabRangeError::Zero { .. })));
        assert!(matches!(parse_slab_range("4..2"), Err(ParseSlabRangeError::Inverted { .. })));
        for input in ["", "a..b", "-2", "2..", "1..2..3"] {
            assert!(
                matches!(parse_slab_range(input), Err(ParseSlabRangeError::Invalid { .. })),
                "{input} should be invalid"
            );
        }
    }
}
