use crate::models::{PercentileAnchor, PercentileEstimate, PercentilePosition};
use crate::tables::INCOME_PERCENTILES;

/// Estimates where `monthly_income` sits among Indian earners.
///
/// # Example
///
/// ```
/// use itax_core::percentile::estimate_domestic_percentile;
///
/// let estimate = estimate_domestic_percentile(22000.0);
///
/// assert_eq!(estimate.percentile, 70.0);
/// assert_eq!(estimate.label, "Around 70.0th percentile");
/// ```
pub fn estimate_domestic_percentile(monthly_income: f64) -> PercentileEstimate {
    estimate_percentile_with(&INCOME_PERCENTILES, monthly_income)
}

/// Piecewise-linear percentile estimate over `anchors`.
///
/// Anchors must be non-empty and strictly increasing in both fields. Incomes
/// at or below the first anchor report its percentile, incomes at or above
/// the last report the last percentile. A NaN income matches no bracket and
/// falls back to the median.
pub fn estimate_percentile_with(
    anchors: &[PercentileAnchor],
    monthly_income: f64,
) -> PercentileEstimate {
    let (Some(first), Some(last)) = (anchors.first(), anchors.last()) else {
        return median_fallback();
    };

    if monthly_income <= first.monthly_income {
        return PercentileEstimate {
            percentile: first.percentile,
            label: format!("Below {}th percentile", first.percentile),
            position: PercentilePosition::BelowRange,
        };
    }
    if monthly_income >= last.monthly_income {
        return PercentileEstimate {
            percentile: last.percentile,
            label: format!("Above {}th percentile", last.percentile),
            position: PercentilePosition::AboveRange,
        };
    }

    for pair in anchors.windows(2) {
        let (lo, hi) = (&pair[0], &pair[1]);
        if monthly_income >= lo.monthly_income && monthly_income <= hi.monthly_income {
            let ratio =
                (monthly_income - lo.monthly_income) / (hi.monthly_income - lo.monthly_income);
            let percentile = lo.percentile + ratio * (hi.percentile - lo.percentile);
            return PercentileEstimate {
                percentile,
                label: format!("Around {percentile:.1}th percentile"),
                position: PercentilePosition::Interpolated,
            };
        }
    }

    median_fallback()
}

fn median_fallback() -> PercentileEstimate {
    PercentileEstimate {
        percentile: 50.0,
        label: "Around median".to_string(),
        position: PercentilePosition::MedianFallback,
    }
}
