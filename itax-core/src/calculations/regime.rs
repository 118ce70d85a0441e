//! Full regime computation: base tax, surcharge, cess.

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::{apply_surcharge, compute_base_tax};
use crate::models::{RebateRule, RegimeId, RegimeResult, Slab};
use crate::tables::CESS_RATE;

/// Computes tax payable on `taxable_income` under one regime.
///
/// `regime` only selects the surcharge schedule; slabs and rebate come from
/// the arguments. Negative income is treated as zero.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use itax_core::calculations::compute_regime;
/// use itax_core::tables::OLD_REGIME;
///
/// let result = compute_regime(dec!(1250000), OLD_REGIME.slabs, &OLD_REGIME.rebate, OLD_REGIME.id);
///
/// assert_eq!(result.slab_tax, dec!(187500));
/// assert_eq!(result.cess, dec!(7500));
/// assert_eq!(result.total_tax, dec!(195000));
/// ```
pub fn compute_regime(
    taxable_income: Decimal,
    slabs: &[Slab],
    rebate: &RebateRule,
    regime: RegimeId,
) -> RegimeResult {
    let tax_at = |income: Decimal| compute_base_tax(income, slabs, rebate);

    let base = tax_at(taxable_income);
    let surcharge = apply_surcharge(taxable_income, base.tax_after_rebate, tax_at, regime);
    let cess = (base.tax_after_rebate + surcharge.surcharge) * CESS_RATE;
    let total_tax = base.tax_after_rebate + surcharge.surcharge + cess;

    debug!(
        regime = regime.as_str(),
        %taxable_income,
        slab_tax = %base.slab_tax,
        rebate = %base.rebate,
        surcharge = %surcharge.surcharge,
        %total_tax,
        "regime computed"
    );

    RegimeResult {
        taxable_income,
        slab_tax: base.slab_tax,
        rebate: base.rebate,
        tax_after_rebate: base.tax_after_rebate,
        surcharge_rate: surcharge.surcharge_rate,
        surcharge: surcharge.surcharge,
        surcharge_relief: surcharge.marginal_relief_applied,
        cess,
        total_tax,
        breakdown: base.breakdown,
    }
}
