//! Income percentile estimation.
//!
//! Two independent estimators: interpolation over the domestic PLFS anchor
//! table, and a lognormal fit to a country's mean income and Gini index.

pub mod domestic;
pub mod lognormal;
pub mod normal;

pub use domestic::{estimate_domestic_percentile, estimate_percentile_with};
pub use lognormal::{estimate_cross_country_percentile, lognormal_sigma};
pub use normal::{inverse_normal_cdf, normal_cdf};
