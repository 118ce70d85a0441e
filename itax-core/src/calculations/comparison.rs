//! Side-by-side comparison of the old and new regimes for one taxpayer.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::calculations::common::clamp_non_negative;
use crate::models::{RegimeId, RegimeResult};
use crate::tables::{NEW_REGIME, OLD_REGIME};

/// Gross income and the deductions claimed under each regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxInputs {
    pub annual_income: Decimal,
    pub old_deductions: Decimal,
    pub new_deductions: Decimal,
}

impl Default for TaxInputs {
    fn default() -> Self {
        Self {
            annual_income: dec!(1250000),
            old_deductions: dec!(150000),
            new_deductions: Decimal::ZERO,
        }
    }
}

impl TaxInputs {
    pub fn taxable_old(&self) -> Decimal {
        clamp_non_negative(self.annual_income - self.old_deductions)
    }

    pub fn taxable_new(&self) -> Decimal {
        clamp_non_negative(self.annual_income - self.new_deductions)
    }

    pub fn monthly_income(&self) -> Decimal {
        self.annual_income / Decimal::from(12)
    }
}

/// Which regime results in less tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LowerRegime {
    New,
    Old,
    Tie,
}

impl fmt::Display for LowerRegime {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(match self {
            Self::New => "New Regime",
            Self::Old => "Old Regime",
            Self::Tie => "Tie",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegimeComparison {
    pub old: RegimeResult,
    pub new: RegimeResult,
    /// Old regime total minus new regime total; positive favours the new regime.
    pub savings: Decimal,
    pub lower_regime: LowerRegime,
}

impl RegimeComparison {
    /// The result computed for `regime`.
    pub fn result(
        &self,
        regime: RegimeId,
    ) -> &RegimeResult {
        match regime {
            RegimeId::Old => &self.old,
            RegimeId::New => &self.new,
        }
    }
}

/// Computes both regimes for `inputs` and picks the cheaper one.
///
/// # Example
///
/// ```
/// use itax_core::calculations::{LowerRegime, TaxInputs, compare_regimes};
///
/// let comparison = compare_regimes(&TaxInputs::default());
///
/// assert_eq!(comparison.lower_regime, LowerRegime::New);
/// ```
pub fn compare_regimes(inputs: &TaxInputs) -> RegimeComparison {
    let old = OLD_REGIME.compute(inputs.taxable_old());
    let new = NEW_REGIME.compute(inputs.taxable_new());
    let savings = old.total_tax - new.total_tax;

    let lower_regime = if savings > Decimal::ZERO {
        LowerRegime::New
    } else if savings < Decimal::ZERO {
        LowerRegime::Old
    } else {
        LowerRegime::Tie
    };

    RegimeComparison {
        old,
        new,
        savings,
        lower_regime,
    }
}
