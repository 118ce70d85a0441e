//! Percentile within a country's income distribution, modelled as lognormal.
//!
//! For a lognormal distribution the Gini coefficient fixes the shape:
//! `G = 2Φ(σ/√2) - 1`, so `σ = √2 · Φ⁻¹((G + 1) / 2)`. The location follows
//! from the mean, `μ = ln(mean) - σ²/2`.

use std::f64::consts::SQRT_2;

use crate::percentile::normal::{inverse_normal_cdf, normal_cdf};

/// Lognormal shape parameter σ for a Gini index on the 0-100 scale.
///
/// `None` when the Gini index is outside (0, 100) or σ is not a positive
/// finite number.
pub fn lognormal_sigma(gini_percent: f64) -> Option<f64> {
    let g = gini_percent / 100.0;
    if !(g > 0.0 && g < 1.0) {
        return None;
    }
    let sigma = SQRT_2 * inverse_normal_cdf((g + 1.0) / 2.0);
    (sigma.is_finite() && sigma > 0.0).then_some(sigma)
}

/// Estimates the percentile (0-100) of `income` in a population with the
/// given mean income and Gini index.
///
/// `income` must be in the same units as `mean_income` (PPP dollars for World
/// Bank GNI figures). Returns `None` rather than a number when no estimate
/// can be made: non-positive mean or income, or a Gini index outside (0, 100).
///
/// # Example
///
/// ```
/// use itax_core::percentile::estimate_cross_country_percentile;
///
/// let at_mean = estimate_cross_country_percentile(20000.0, 35.0, 20000.0).unwrap();
/// assert!(at_mean > 50.0 && at_mean < 70.0);
///
/// assert_eq!(estimate_cross_country_percentile(20000.0, 0.0, 20000.0), None);
/// ```
pub fn estimate_cross_country_percentile(
    mean_income: f64,
    gini_percent: f64,
    income: f64,
) -> Option<f64> {
    if !(mean_income > 0.0 && income > 0.0) {
        return None;
    }
    let sigma = lognormal_sigma(gini_percent)?;
    let mu = mean_income.ln() - sigma * sigma / 2.0;
    let z = (income.ln() - mu) / sigma;
    let percentile = normal_cdf(z) * 100.0;

    (!percentile.is_nan()).then(|| percentile.clamp(0.0, 100.0))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // =========================================================================
    // lognormal_sigma tests
    // =========================================================================

    #[test]
    fn sigma_reproduces_gini() {
        for gini in [20.0, 35.0, 50.0, 63.0] {
            let sigma = lognormal_sigma(gini).unwrap();
            let implied = (2.0 * normal_cdf(sigma / SQRT_2) - 1.0) * 100.0;
            assert!((implied - gini).abs() < 1e-4, "gini {gini} gave {implied}");
        }
    }

    #[test]
    fn sigma_grows_with_inequality() {
        let low = lognormal_sigma(25.0).unwrap();
        let high = lognormal_sigma(45.0).unwrap();

        assert!(high > low);
    }

    #[test]
    fn sigma_rejects_out_of_range_gini() {
        assert_eq!(lognormal_sigma(0.0), None);
        assert_eq!(lognormal_sigma(100.0), None);
        assert_eq!(lognormal_sigma(-3.0), None);
        assert_eq!(lognormal_sigma(140.0), None);
        assert_eq!(lognormal_sigma(f64::NAN), None);
    }

    // =========================================================================
    // estimate_cross_country_percentile tests
    // =========================================================================

    #[test]
    fn income_at_mean_sits_above_median() {
        let percentile = estimate_cross_country_percentile(65000.0, 41.3, 65000.0).unwrap();

        assert!(percentile > 50.0);
        assert!(percentile < 70.0);
    }

    #[test]
    fn income_at_median_is_fiftieth_percentile() {
        let mean: f64 = 12000.0;
        let sigma = lognormal_sigma(32.8).unwrap();
        let median = (mean.ln() - sigma * sigma / 2.0).exp();

        let percentile = estimate_cross_country_percentile(mean, 32.8, median).unwrap();

        assert!((percentile - 50.0).abs() < 1e-4);
    }

    #[test]
    fn strictly_increasing_in_income() {
        let mut previous = 0.0;
        for step in 1..=60 {
            let income = 500.0 * f64::from(step);
            let percentile = estimate_cross_country_percentile(9000.0, 32.8, income).unwrap();
            assert!(percentile > previous, "not increasing at {income}");
            previous = percentile;
        }
    }

    #[test]
    fn mean_earner_percentile_rises_with_inequality() {
        // With more inequality the mean drifts further above the median,
        // so the mean earner sits at a higher percentile.
        let equal = estimate_cross_country_percentile(30000.0, 25.0, 30000.0).unwrap();
        let unequal = estimate_cross_country_percentile(30000.0, 55.0, 30000.0).unwrap();

        assert!(unequal > equal);
    }

    #[test]
    fn result_is_within_bounds_for_extreme_incomes() {
        let tiny = estimate_cross_country_percentile(50000.0, 35.0, 1e-9).unwrap();
        let huge = estimate_cross_country_percentile(50000.0, 35.0, 1e15).unwrap();

        assert!((0.0..=100.0).contains(&tiny));
        assert!((0.0..=100.0).contains(&huge));
        assert!(tiny < 1e-6);
        assert!(huge > 100.0 - 1e-6);
    }

    #[test]
    fn invalid_inputs_give_no_estimate() {
        assert_eq!(estimate_cross_country_percentile(0.0, 35.0, 1000.0), None);
        assert_eq!(estimate_cross_country_percentile(-10.0, 35.0, 1000.0), None);
        assert_eq!(estimate_cross_country_percentile(20000.0, 35.0, 0.0), None);
        assert_eq!(estimate_cross_country_percentile(20000.0, 35.0, -1.0), None);
        assert_eq!(estimate_cross_country_percentile(20000.0, 100.0, 1000.0), None);
        assert_eq!(estimate_cross_country_percentile(f64::NAN, 35.0, 1000.0), None);
        assert_eq!(estimate_cross_country_percentile(20000.0, 35.0, f64::NAN), None);
    }

    #[test]
    fn infinite_income_saturates() {
        assert_eq!(estimate_cross_country_percentile(20000.0, 35.0, f64::INFINITY), Some(100.0));
    }
}
