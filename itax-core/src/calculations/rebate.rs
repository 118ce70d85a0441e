//! Slab tax with the Section 87A rebate applied.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::calculations::build_slab_breakdown;
use crate::calculations::common::clamp_non_negative;
use crate::models::{RebatePolicy, RebateRule, Slab, SlabBreakdown};

/// Slab tax before surcharge and cess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseTax {
    pub slab_tax: Decimal,
    pub rebate: Decimal,
    pub tax_after_rebate: Decimal,
    pub breakdown: Vec<SlabBreakdown>,
}

/// Computes slab tax for `taxable_income` and applies the rebate `rule`.
///
/// At or below the threshold the rebate is the slab tax, capped at
/// `rule.cap`. Above it, only [`RebatePolicy::MarginalRelief`] grants a
/// rebate, and only the part of the slab tax exceeding
/// `taxable_income - rule.threshold`.
///
/// Depends on nothing but its arguments, so it can be evaluated at a
/// hypothetical income (the surcharge calculator does this at bracket
/// thresholds).
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use itax_core::calculations::compute_base_tax;
/// use itax_core::tables::NEW_REGIME;
///
/// let base = compute_base_tax(dec!(1210000), NEW_REGIME.slabs, &NEW_REGIME.rebate);
///
/// assert_eq!(base.slab_tax, dec!(61500));
/// assert_eq!(base.rebate, dec!(51500));
/// assert_eq!(base.tax_after_rebate, dec!(10000));
/// ```
pub fn compute_base_tax(
    taxable_income: Decimal,
    slabs: &[Slab],
    rule: &RebateRule,
) -> BaseTax {
    let breakdown = build_slab_breakdown(taxable_income, slabs);
    let slab_tax: Decimal = breakdown.iter().map(|slab| slab.tax).sum();
    let rebate = rebate_for(taxable_income, slab_tax, rule);

    BaseTax {
        slab_tax,
        rebate,
        tax_after_rebate: clamp_non_negative(slab_tax - rebate),
        breakdown,
    }
}

fn rebate_for(
    taxable_income: Decimal,
    slab_tax: Decimal,
    rule: &RebateRule,
) -> Decimal {
    if taxable_income <= rule.threshold {
        return slab_tax.min(rule.cap);
    }

    match rule.policy {
        RebatePolicy::FullBelowThreshold => Decimal::ZERO,
        RebatePolicy::MarginalRelief => {
            let max_payable = taxable_income - rule.threshold;
            if slab_tax > max_payable {
                debug!(%taxable_income, %slab_tax, %max_payable, "rebate marginal relief applied");
                slab_tax - max_payable
            } else {
                Decimal::ZERO
            }
        }
    }
}
