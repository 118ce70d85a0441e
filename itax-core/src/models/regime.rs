use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::compute_regime;
use crate::models::{RegimeResult, Slab};

/// The two statutory regimes.
///
/// Besides labelling results, the regime selects the surcharge schedule:
/// the old regime keeps a 37% top rate, the new regime caps it at 25%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegimeId {
    Old,
    New,
}

impl RegimeId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Old => "old",
            Self::New => "new",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "old" => Some(Self::Old),
            "new" => Some(Self::New),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Old => "Old Regime",
            Self::New => "New Regime",
        }
    }
}

impl fmt::Display for RegimeId {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the rebate behaves once income crosses the rebate threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RebatePolicy {
    /// Rebate only at or below the threshold; none above it.
    FullBelowThreshold,
    /// Above the threshold, tax is capped at the income in excess of it.
    MarginalRelief,
}

/// Rebate threshold, cap and policy for one regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RebateRule {
    /// Highest taxable income that still qualifies for the full rebate.
    pub threshold: Decimal,
    /// Maximum rebate at or below the threshold.
    pub cap: Decimal,
    pub policy: RebatePolicy,
}

/// Everything needed to compute tax under one regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegimeConfig {
    pub id: RegimeId,
    pub slabs: &'static [Slab],
    pub rebate: RebateRule,
}

impl RegimeConfig {
    /// Computes the full regime result for `taxable_income`.
    pub fn compute(
        &self,
        taxable_income: Decimal,
    ) -> RegimeResult {
        compute_regime(taxable_income, self.slabs, &self.rebate, self.id)
    }
}
