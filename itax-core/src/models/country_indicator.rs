use serde::{Deserialize, Serialize};

/// Income indicators for one country, plus the percentile derived from them.
///
/// `mean_income` is GNI per capita (PPP, current international dollars) and
/// `gini` is on the 0-100 scale. Any field may be missing in the source data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryIndicatorRecord {
    /// ISO 3166-1 alpha-3 code.
    pub code: String,
    pub name: String,
    pub mean_income: Option<f64>,
    pub mean_income_year: Option<i32>,
    pub gini: Option<f64>,
    pub gini_year: Option<i32>,
    pub derived_percentile: Option<f64>,
}
