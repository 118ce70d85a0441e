use rust_decimal::Decimal;
use serde::Serialize;

/// Income taxed within a single slab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlabBreakdown {
    pub label: &'static str,
    pub amount: Decimal,
    pub rate: Decimal,
    pub tax: Decimal,
}

/// Outcome of a full computation for one regime.
///
/// `total_tax == tax_after_rebate + surcharge + cess` and
/// `cess == CESS_RATE * (tax_after_rebate + surcharge)` hold exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegimeResult {
    pub taxable_income: Decimal,
    pub slab_tax: Decimal,
    pub rebate: Decimal,
    pub tax_after_rebate: Decimal,
    pub surcharge_rate: Decimal,
    pub surcharge: Decimal,
    /// Whether marginal relief capped the surcharge.
    pub surcharge_relief: bool,
    pub cess: Decimal,
    pub total_tax: Decimal,
    pub breakdown: Vec<SlabBreakdown>,
}

impl RegimeResult {
    /// Sums slab tax over the inclusive breakdown index range `start..=end`.
    ///
    /// Indices past the end of the table are clamped; an inverted range sums
    /// to zero.
    pub fn tax_in_slab_range(
        &self,
        start: usize,
        end: usize,
    ) -> Decimal {
        let Some(last) = self.breakdown.len().checked_sub(1) else {
            return Decimal::ZERO;
        };
        let end = end.min(last);
        if start > end {
            return Decimal::ZERO;
        }
        self.breakdown[start..=end].iter().map(|slab| slab.tax).sum()
    }

    /// Total tax as a fraction of `gross_income`, guarding against tiny
    /// denominators by dividing by at least one rupee.
    pub fn effective_rate(
        &self,
        gross_income: Decimal,
    ) -> Decimal {
        self.total_tax / gross_income.max(Decimal::ONE)
    }
}
