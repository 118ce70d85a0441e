//! Tax calculations for the Indian personal income tax regimes.
//!
//! The pipeline runs bottom-up: slab breakdown, base tax with rebate,
//! surcharge with marginal relief, then cess and totals.

pub mod common;
pub mod comparison;
pub mod rebate;
pub mod regime;
pub mod slabs;
pub mod surcharge;

pub use comparison::{LowerRegime, RegimeComparison, TaxInputs, compare_regimes};
pub use rebate::{BaseTax, compute_base_tax};
pub use regime::compute_regime;
pub use slabs::build_slab_breakdown;
pub use surcharge::{SurchargeResult, apply_surcharge, surcharge_bracket, surcharge_rate};
