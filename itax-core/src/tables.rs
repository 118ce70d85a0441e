//! Statutory and statistical reference tables for FY 2025-26 (AY 2026-27).
//!
//! All values are fixed facts for the modelled fiscal year and are exposed as
//! constants; nothing here is loaded or configured at runtime.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{PercentileAnchor, RebatePolicy, RebateRule, RegimeConfig, RegimeId, Slab};

/// Health and education cess, levied on tax plus surcharge.
pub const CESS_RATE: Decimal = dec!(0.04);

/// Old regime slabs.
pub const OLD_SLABS: [Slab; 4] = [
    Slab {
        upper_bound: Some(dec!(250000)),
        rate: dec!(0),
        label: "Up to ₹2,50,000",
    },
    Slab {
        upper_bound: Some(dec!(500000)),
        rate: dec!(0.05),
        label: "₹2,50,001 to ₹5,00,000",
    },
    Slab {
        upper_bound: Some(dec!(1000000)),
        rate: dec!(0.20),
        label: "₹5,00,001 to ₹10,00,000",
    },
    Slab {
        upper_bound: None,
        rate: dec!(0.30),
        label: "Above ₹10,00,000",
    },
];

/// New regime slabs.
pub const NEW_SLABS: [Slab; 7] = [
    Slab {
        upper_bound: Some(dec!(400000)),
        rate: dec!(0),
        label: "Up to ₹4,00,000",
    },
    Slab {
        upper_bound: Some(dec!(800000)),
        rate: dec!(0.05),
        label: "₹4,00,001 to ₹8,00,000",
    },
    Slab {
        upper_bound: Some(dec!(1200000)),
        rate: dec!(0.10),
        label: "₹8,00,001 to ₹12,00,000",
    },
    Slab {
        upper_bound: Some(dec!(1600000)),
        rate: dec!(0.15),
        label: "₹12,00,001 to ₹16,00,000",
    },
    Slab {
        upper_bound: Some(dec!(2000000)),
        rate: dec!(0.20),
        label: "₹16,00,001 to ₹20,00,000",
    },
    Slab {
        upper_bound: Some(dec!(2400000)),
        rate: dec!(0.25),
        label: "₹20,00,001 to ₹24,00,000",
    },
    Slab {
        upper_bound: None,
        rate: dec!(0.30),
        label: "Above ₹24,00,000",
    },
];

pub const OLD_REGIME: RegimeConfig = RegimeConfig {
    id: RegimeId::Old,
    slabs: &OLD_SLABS,
    rebate: RebateRule {
        threshold: dec!(500000),
        cap: dec!(12500),
        policy: RebatePolicy::FullBelowThreshold,
    },
};

pub const NEW_REGIME: RegimeConfig = RegimeConfig {
    id: RegimeId::New,
    slabs: &NEW_SLABS,
    rebate: RebateRule {
        threshold: dec!(1200000),
        cap: dec!(60000),
        policy: RebatePolicy::MarginalRelief,
    },
};

/// A surcharge tier: applies to taxable income strictly above `threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurchargeBracket {
    pub threshold: Decimal,
    pub old_rate: Decimal,
    pub new_rate: Decimal,
}

impl SurchargeBracket {
    pub fn rate_for(
        &self,
        regime: RegimeId,
    ) -> Decimal {
        match regime {
            RegimeId::Old => self.old_rate,
            RegimeId::New => self.new_rate,
        }
    }
}

/// Surcharge tiers in increasing threshold order.
pub const SURCHARGE_BRACKETS: [SurchargeBracket; 4] = [
    SurchargeBracket {
        threshold: dec!(5000000),
        old_rate: dec!(0.10),
        new_rate: dec!(0.10),
    },
    SurchargeBracket {
        threshold: dec!(10000000),
        old_rate: dec!(0.15),
        new_rate: dec!(0.15),
    },
    SurchargeBracket {
        threshold: dec!(20000000),
        old_rate: dec!(0.25),
        new_rate: dec!(0.25),
    },
    SurchargeBracket {
        threshold: dec!(50000000),
        old_rate: dec!(0.37),
        new_rate: dec!(0.25),
    },
];

/// Monthly income thresholds from PLFS 2023-24 (bottom 10%, median,
/// top 10%, top 1%).
pub const INCOME_PERCENTILES: [PercentileAnchor; 4] = [
    PercentileAnchor {
        percentile: 10.0,
        monthly_income: 3900.0,
    },
    PercentileAnchor {
        percentile: 50.0,
        monthly_income: 12000.0,
    },
    PercentileAnchor {
        percentile: 90.0,
        monthly_income: 32000.0,
    },
    PercentileAnchor {
        percentile: 99.0,
        monthly_income: 75000.0,
    },
];
