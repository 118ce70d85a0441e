//! Surcharge on high incomes, with marginal relief at bracket thresholds.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::calculations::BaseTax;
use crate::calculations::common::clamp_non_negative;
use crate::models::RegimeId;
use crate::tables::{SURCHARGE_BRACKETS, SurchargeBracket};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SurchargeResult {
    pub surcharge_rate: Decimal,
    pub surcharge: Decimal,
    pub marginal_relief_applied: bool,
}

impl SurchargeResult {
    const NONE: Self = Self {
        surcharge_rate: Decimal::ZERO,
        surcharge: Decimal::ZERO,
        marginal_relief_applied: false,
    };
}

/// Highest surcharge bracket whose threshold `taxable_income` exceeds.
pub fn surcharge_bracket(taxable_income: Decimal) -> Option<&'static SurchargeBracket> {
    SURCHARGE_BRACKETS
        .iter()
        .rev()
        .find(|bracket| taxable_income > bracket.threshold)
}

/// Surcharge rate for `taxable_income` under `regime`; zero up to ₹50 lakh.
pub fn surcharge_rate(
    taxable_income: Decimal,
    regime: RegimeId,
) -> Decimal {
    surcharge_bracket(taxable_income).map_or(Decimal::ZERO, |bracket| bracket.rate_for(regime))
}

/// Applies the surcharge to `tax_after_rebate`.
///
/// `tax_at` evaluates base tax at an arbitrary income; it is called once, at
/// the threshold of the bracket `taxable_income` falls in. Tax plus surcharge
/// is capped at the tax on the threshold plus the income above it.
pub fn apply_surcharge<F>(
    taxable_income: Decimal,
    tax_after_rebate: Decimal,
    tax_at: F,
    regime: RegimeId,
) -> SurchargeResult
where
    F: Fn(Decimal) -> BaseTax,
{
    let Some(bracket) = surcharge_bracket(taxable_income) else {
        return SurchargeResult::NONE;
    };
    let surcharge_rate = bracket.rate_for(regime);
    if surcharge_rate.is_zero() {
        return SurchargeResult::NONE;
    }

    let tax_at_threshold = tax_at(bracket.threshold).tax_after_rebate;
    let max_payable = tax_at_threshold + (taxable_income - bracket.threshold);
    let surcharge = tax_after_rebate * surcharge_rate;

    if tax_after_rebate + surcharge > max_payable {
        let relieved = clamp_non_negative(max_payable - tax_after_rebate);
        debug!(
            %taxable_income,
            threshold = %bracket.threshold,
            %surcharge,
            %relieved,
            "surcharge marginal relief applied"
        );
        return SurchargeResult {
            surcharge_rate,
            surcharge: relieved,
            marginal_relief_applied: true,
        };
    }

    SurchargeResult {
        surcharge_rate,
        surcharge,
        marginal_relief_applied: false,
    }
}
