use serde::{Deserialize, Serialize};

/// An empirical (percentile, monthly income) point of a distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentileAnchor {
    pub percentile: f64,
    pub monthly_income: f64,
}

/// Where an income fell relative to the anchor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PercentilePosition {
    BelowRange,
    Interpolated,
    AboveRange,
    /// No bracketing anchor pair was found (non-finite input).
    MedianFallback,
}

/// Estimated percentile together with its display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PercentileEstimate {
    pub percentile: f64,
    pub label: String,
    pub position: PercentilePosition,
}
