//! Indian personal income tax and income percentile engines.
//!
//! Everything in this crate is a pure function of its arguments: no I/O, no
//! shared state, safe to call from any number of threads.

pub mod calculations;
pub mod models;
pub mod percentile;
pub mod tables;

pub use calculations::{LowerRegime, RegimeComparison, TaxInputs, compare_regimes, compute_regime};
pub use models::*;
pub use percentile::{estimate_cross_country_percentile, estimate_domestic_percentile};
pub use tables::{NEW_REGIME, OLD_REGIME};
