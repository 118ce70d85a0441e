//! Partitioning taxable income across a progressive slab table.

use rust_decimal::Decimal;

use crate::calculations::common::clamp_non_negative;
use crate::models::{Slab, SlabBreakdown};

/// Splits `taxable_income` across `slabs`, lowest slab first.
///
/// Each slab absorbs the smaller of its span and the income still
/// unallocated. The result has one entry per slab, in table order, and its
/// amounts sum to the income clamped at zero.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use itax_core::calculations::build_slab_breakdown;
/// use itax_core::tables::OLD_SLABS;
///
/// let breakdown = build_slab_breakdown(dec!(600000), &OLD_SLABS);
///
/// assert_eq!(breakdown[0].amount, dec!(250000));
/// assert_eq!(breakdown[1].amount, dec!(250000));
/// assert_eq!(breakdown[2].amount, dec!(100000));
/// assert_eq!(breakdown[2].tax, dec!(20000));
/// assert_eq!(breakdown[3].amount, dec!(0));
/// ```
pub fn build_slab_breakdown(
    taxable_income: Decimal,
    slabs: &[Slab],
) -> Vec<SlabBreakdown> {
    let mut remaining = clamp_non_negative(taxable_income);
    let mut lower = Decimal::ZERO;

    slabs
        .iter()
        .map(|slab| {
            let amount = match slab.span(lower) {
                Some(span) => clamp_non_negative(span.min(remaining)),
                None => remaining,
            };
            remaining -= amount;
            if let Some(upper) = slab.upper_bound {
                lower = upper;
            }

            SlabBreakdown {
                label: slab.label,
                amount,
                rate: slab.rate,
                tax: amount * slab.rate,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::tables::{NEW_SLABS, OLD_SLABS};

    fn amounts(breakdown: &[SlabBreakdown]) -> Vec<Decimal> {
        breakdown.iter().map(|b| b.amount).collect()
    }

    #[test]
    fn zero_income_fills_no_slab() {
        let breakdown = build_slab_breakdown(dec!(0), &OLD_SLABS);

        assert_eq!(breakdown.len(), 4);
        assert!(breakdown.iter().all(|b| b.amount.is_zero() && b.tax.is_zero()));
    }

    #[test]
    fn negative_income_is_clamped_to_zero() {
        let breakdown = build_slab_breakdown(dec!(-250000), &NEW_SLABS);

        assert_eq!(breakdown.len(), 7);
        assert!(breakdown.iter().all(|b| b.amount.is_zero()));
    }

    #[test]
    fn income_within_first_slab() {
        let breakdown = build_slab_breakdown(dec!(100000), &OLD_SLABS);

        assert_eq!(amounts(&breakdown), vec![dec!(100000), dec!(0), dec!(0), dec!(0)]);
    }

    #[test]
    fn income_on_slab_boundary_fills_that_slab_exactly() {
        let breakdown = build_slab_breakdown(dec!(500000), &OLD_SLABS);

        assert_eq!(amounts(&breakdown), vec![dec!(250000), dec!(250000), dec!(0), dec!(0)]);
        assert_eq!(breakdown[1].tax, dec!(12500));
    }

    #[test]
    fn unbounded_slab_takes_the_remainder() {
        let breakdown = build_slab_breakdown(dec!(1250000), &OLD_SLABS);

        assert_eq!(
            amounts(&breakdown),
            vec![dec!(250000), dec!(250000), dec!(500000), dec!(250000)]
        );
        let taxes: Vec<_> = breakdown.iter().map(|b| b.tax).collect();
        assert_eq!(taxes, vec![dec!(0), dec!(12500), dec!(100000), dec!(75000)]);
    }

    #[test]
    fn breakdown_preserves_labels_and_rates_in_table_order() {
        let breakdown = build_slab_breakdown(dec!(3000000), &NEW_SLABS);

        for (slab, row) in NEW_SLABS.iter().zip(&breakdown) {
            assert_eq!(row.label, slab.label);
            assert_eq!(row.rate, slab.rate);
        }
        assert_eq!(breakdown[6].amount, dec!(600000));
    }

    #[test]
    fn amounts_sum_to_income_and_never_exceed_span() {
        let incomes = [
            dec!(0),
            dec!(1),
            dec!(399999.99),
            dec!(400000),
            dec!(400000.01),
            dec!(1234567.89),
            dec!(2400000),
            dec!(98765432.10),
        ];

        for slabs in [&OLD_SLABS[..], &NEW_SLABS[..]] {
            for income in incomes {
                let breakdown = build_slab_breakdown(income, slabs);
                let total: Decimal = breakdown.iter().map(|b| b.amount).sum();
                assert_eq!(total, income, "income {income}");

                let mut lower = Decimal::ZERO;
                for (slab, row) in slabs.iter().zip(&breakdown) {
                    assert!(row.amount >= Decimal::ZERO);
                    if let Some(span) = slab.span(lower) {
                        assert!(row.amount <= span);
                    }
                    assert_eq!(row.tax, row.amount * row.rate);
                    lower = slab.upper_bound.unwrap_or(lower);
                }
            }
        }
    }

    #[test]
    fn custom_single_slab_table() {
        let flat = [Slab {
            upper_bound: None,
            rate: dec!(0.10),
            label: "Flat",
        }];

        let breakdown = build_slab_breakdown(dec!(1000), &flat);

        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].tax, dec!(100));
    }
}
