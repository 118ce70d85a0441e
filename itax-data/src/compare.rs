//! Places an Indian income within other countries' income distributions.

use std::cmp::Ordering;

use itax_core::CountryIndicatorRecord;
use itax_core::estimate_cross_country_percentile;
use serde::Serialize;
use tracing::{debug, info};

use crate::groups::{COUNTRY_GROUPS, CountryGroup, HOME_COUNTRY, all_country_codes};
use crate::indicators::{Indicator, IndicatorError, IndicatorMap};
use crate::source::IndicatorSource;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupComparison {
    pub key: &'static str,
    pub label: &'static str,
    pub countries: Vec<CountryIndicatorRecord>,
}

impl GroupComparison {
    /// Countries by derived percentile, highest first. Countries without an
    /// estimate keep their listed order at the end.
    pub fn ranked(&self) -> Vec<&CountryIndicatorRecord> {
        let mut ranked: Vec<_> = self.countries.iter().collect();
        ranked.sort_by(|a, b| match (a.derived_percentile, b.derived_percentile) {
            (Some(a), Some(b)) => b.total_cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        ranked
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncomeComparison {
    /// Annual income in rupees, as given.
    pub user_income: f64,
    /// Annual income in international dollars, when a PPP factor is known.
    pub user_income_ppp: Option<f64>,
    pub ppp_year: Option<i32>,
    pub groups: Vec<GroupComparison>,
}

/// Fetches the indicators and builds the comparison for `annual_income_inr`.
///
/// GNI, Gini and the PPP factor are requested concurrently. Any source error
/// aborts the whole comparison.
pub async fn compare_income<S: IndicatorSource + ?Sized>(
    source: &S,
    annual_income_inr: f64,
) -> Result<IncomeComparison, IndicatorError> {
    let codes = all_country_codes();

    let (gni, gini, ppp) = tokio::try_join!(
        source.fetch(&codes, Indicator::GniPerCapitaPpp),
        source.fetch(&codes, Indicator::Gini),
        source.fetch(&[HOME_COUNTRY], Indicator::PppConversionFactor),
    )?;

    info!(
        gni = gni.len(),
        gini = gini.len(),
        "indicators loaded for cross-country comparison"
    );
    Ok(build_comparison(annual_income_inr, &gni, &gini, &ppp))
}

/// Pure assembly step of [`compare_income`].
pub fn build_comparison(
    annual_income_inr: f64,
    gni: &IndicatorMap,
    gini: &IndicatorMap,
    ppp: &IndicatorMap,
) -> IncomeComparison {
    let home_ppp = ppp.get(HOME_COUNTRY).copied().unwrap_or_default();
    let user_income_ppp = home_ppp
        .value
        .filter(|factor| *factor > 0.0)
        .map(|factor| annual_income_inr / factor);
    debug!(?user_income_ppp, ppp_year = ?home_ppp.year, "converted income to PPP dollars");

    let groups = COUNTRY_GROUPS
        .iter()
        .map(|group| build_group(group, user_income_ppp, gni, gini))
        .collect();

    IncomeComparison {
        user_income: annual_income_inr,
        user_income_ppp,
        ppp_year: home_ppp.year,
        groups,
    }
}

fn build_group(
    group: &CountryGroup,
    user_income_ppp: Option<f64>,
    gni: &IndicatorMap,
    gini: &IndicatorMap,
) -> GroupComparison {
    let countries = group
        .countries
        .iter()
        .map(|&(code, name)| {
            let mean = gni.get(code).copied().unwrap_or_default();
            let inequality = gini.get(code).copied().unwrap_or_default();

            let derived_percentile = match (mean.value, inequality.value, user_income_ppp) {
                (Some(mean), Some(gini), Some(income)) => {
                    estimate_cross_country_percentile(mean, gini, income)
                }
                _ => None,
            };

            CountryIndicatorRecord {
                code: code.to_owned(),
                name: name.to_owned(),
                mean_income: mean.value,
                mean_income_year: mean.year,
                gini: inequality.value,
                gini_year: inequality.year,
                derived_percentile,
            }
        })
        .collect();

    GroupComparison {
        key: group.key,
        label: group.label,
        countries,
    }
}
