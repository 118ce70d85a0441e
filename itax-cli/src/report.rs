//! Plain-text reports printed by the `itax` subcommands.

use itax_core::calculations::common::income_from_f64;
use itax_core::{
    LowerRegime, PercentileEstimate, RegimeComparison, RegimeId, RegimeResult, TaxInputs,
};
use itax_data::{GroupComparison, IncomeComparison, Scenario};
use rust_decimal::Decimal;

use crate::format::{format_inr, format_percent, format_usd};
use crate::utils::SlabRange;

fn row(
    label: &str,
    value: &str,
) -> String {
    format!("  {label:<32}{value:>16}")
}

/// Slab table and totals for one regime.
pub fn render_regime(
    regime: RegimeId,
    result: &RegimeResult,
    gross_income: Decimal,
) -> String {
    let mut lines = vec![
        regime.label().to_string(),
        row("Taxable income", &format_inr(result.taxable_income)),
        String::new(),
        format!("  {:<32}{:>16}{:>8}{:>14}", "Slab", "Income", "Rate", "Tax"),
    ];

    for slab in &result.breakdown {
        lines.push(format!(
            "  {:<32}{:>16}{:>8}{:>14}",
            slab.label,
            format_inr(slab.amount),
            format_percent(slab.rate),
            format_inr(slab.tax)
        ));
    }

    lines.push(String::new());
    lines.push(row("Slab tax", &format_inr(result.slab_tax)));
    lines.push(row("Rebate u/s 87A", &format_inr(result.rebate)));

    let surcharge_label = if result.surcharge_relief {
        format!("Surcharge ({}, marginal relief)", format_percent(result.surcharge_rate))
    } else {
        format!("Surcharge ({})", format_percent(result.surcharge_rate))
    };
    lines.push(row(&surcharge_label, &format_inr(result.surcharge)));
    lines.push(row("Health & education cess (4%)", &format_inr(result.cess)));
    lines.push(row("Total tax", &format_inr(result.total_tax)));
    lines.push(row(
        "Effective rate",
        &format_percent(result.effective_rate(gross_income)),
    ));

    lines.join("\n")
}

/// Tax collected by a run of slabs, numbered from one as in the slab table.
pub fn render_slab_range(
    regime: RegimeId,
    result: &RegimeResult,
    range: SlabRange,
) -> String {
    let slabs = if range.start == range.end {
        format!("slab {}", range.start + 1)
    } else {
        format!("slabs {} to {}", range.start + 1, range.end + 1)
    };
    row(
        &format!("{regime}, {slabs}"),
        &format_inr(result.tax_in_slab_range(range.start, range.end)),
    )
}

/// One-line verdict on which regime is cheaper.
pub fn render_verdict(comparison: &RegimeComparison) -> String {
    match comparison.lower_regime {
        LowerRegime::Tie => "Both regimes result in the same tax".to_string(),
        LowerRegime::New | LowerRegime::Old => format!(
            "{} saves {}",
            comparison.lower_regime,
            format_inr(comparison.savings.abs())
        ),
    }
}

pub fn render_tax_report(
    inputs: &TaxInputs,
    comparison: &RegimeComparison,
) -> String {
    [
        row("Annual income", &format_inr(inputs.annual_income)),
        String::new(),
        render_regime(RegimeId::Old, &comparison.old, inputs.annual_income),
        String::new(),
        render_regime(RegimeId::New, &comparison.new, inputs.annual_income),
        String::new(),
        render_verdict(comparison),
    ]
    .join("\n")
}

pub fn render_percentile(
    monthly_income: Decimal,
    estimate: &PercentileEstimate,
) -> String {
    format!(
        "Monthly income {}: {} of Indian earners",
        format_inr(monthly_income),
        estimate.label
    )
}

fn render_group(group: &GroupComparison) -> Vec<String> {
    let mut lines = vec![
        group.label.to_string(),
        format!(
            "  {:<24}{:>14}{:>8}{:>12}",
            "Country", "GNI (PPP)", "Gini", "Percentile"
        ),
    ];

    for country in group.ranked() {
        let gni = country.mean_income.map_or_else(|| "-".to_string(), format_usd);
        let gini = country
            .gini
            .map_or_else(|| "-".to_string(), |g| format!("{g:.1}"));
        let percentile = country
            .derived_percentile
            .map_or_else(|| "-".to_string(), |p| format!("{p:.1}"));

        lines.push(format!(
            "  {:<24}{:>14}{:>8}{:>12}",
            country.name, gni, gini, percentile
        ));
    }
    lines
}

pub fn render_income_comparison(comparison: &IncomeComparison) -> String {
    let mut lines = vec![format!(
        "Annual income {}",
        format_inr(income_from_f64(comparison.user_income))
    )];

    match comparison.user_income_ppp {
        Some(ppp) => {
            let year = comparison
                .ppp_year
                .map_or_else(String::new, |y| format!(" ({y} PPP factor)"));
            lines.push(format!("  ≈ {} in international dollars{year}", format_usd(ppp)));
        }
        None => lines.push("  No PPP conversion factor available; percentiles omitted".to_string()),
    }

    for group in &comparison.groups {
        lines.push(String::new());
        lines.extend(render_group(group));
    }

    lines.join("\n")
}

/// Summary table, one row per scenario.
pub fn render_batch(rows: &[(Scenario, RegimeComparison)]) -> String {
    let mut lines = vec![format!(
        "{:<20}{:>16}{:>16}{:>16}{:>14}",
        "Scenario", "Income", "Old regime", "New regime", "Lower"
    )];

    for (scenario, comparison) in rows {
        lines.push(format!(
            "{:<20}{:>16}{:>16}{:>16}{:>14}",
            scenario.label,
            format_inr(scenario.inputs.annual_income),
            format_inr(comparison.old.total_tax),
            format_inr(comparison.new.total_tax),
            comparison.lower_regime.to_string()
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use itax_core::{
        CountryIndicatorRecord, NEW_REGIME, compare_regimes, estimate_domestic_percentile,
    };
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn tax_report_lists_both_regimes_and_verdict() {
        let inputs = TaxInputs::default();
        let report = render_tax_report(&inputs, &compare_regimes(&inputs));

        assert!(report.contains("Old Regime"));
        assert!(report.contains("New Regime"));
        assert!(report.contains("₹1,48,200"));
        assert!(report.contains("₹52,000"));
        assert!(report.ends_with("New Regime saves ₹96,200"));
    }

    #[test]
    fn regime_report_has_one_row_per_slab() {
        let comparison = compare_regimes(&TaxInputs::default());

        let report = render_regime(RegimeId::New, &comparison.new, dec!(1250000));

        let slab_rows = report
            .lines()
            .filter(|l| l.contains(" to ₹") || l.contains("Above ₹"))
            .count();
        assert_eq!(slab_rows, 7);
        assert!(report.contains("Up to ₹4,00,000"));
        assert!(report.contains("Above ₹24,00,000"));
        assert!(report.contains("Effective rate"));
    }

    #[test]
    fn surcharge_relief_is_flagged() {
        let inputs = TaxInputs {
            annual_income: dec!(5010000),
            old_deductions: dec!(0),
            new_deductions: dec!(0),
        };
        let comparison = compare_regimes(&inputs);

        let report = render_regime(RegimeId::Old, &comparison.old, inputs.annual_income);

        assert!(report.contains("Surcharge (10%, marginal relief)"));
        assert!(report.contains("₹7,000"));
    }

    #[test]
    fn slab_range_sums_selected_slabs() {
        let result = NEW_REGIME.compute(dec!(1250000));

        assert_eq!(
            render_slab_range(RegimeId::New, &result, SlabRange { start: 1, end: 2 }),
            row("New Regime, slabs 2 to 3", "₹60,000")
        );
        assert_eq!(
            render_slab_range(RegimeId::New, &result, SlabRange { start: 3, end: 3 }),
            row("New Regime, slab 4", "₹7,500")
        );
    }

    #[test]
    fn slab_range_past_the_table_is_clamped() {
        let result = NEW_REGIME.compute(dec!(1250000));

        let clamped = render_slab_range(RegimeId::New, &result, SlabRange { start: 2, end: 98 });
        let beyond = render_slab_range(RegimeId::New, &result, SlabRange { start: 9, end: 11 });

        assert!(clamped.ends_with("₹47,500"));
        assert!(beyond.ends_with("₹0"));
    }

    #[test]
    fn tie_verdict() {
        let comparison = compare_regimes(&TaxInputs {
            annual_income: dec!(0),
            old_deductions: dec!(0),
            new_deductions: dec!(0),
        });

        assert_eq!(render_verdict(&comparison), "Both regimes result in the same tax");
    }

    #[test]
    fn old_regime_verdict_uses_absolute_savings() {
        let comparison = compare_regimes(&TaxInputs {
            annual_income: dec!(3000000),
            old_deductions: dec!(1500000),
            new_deductions: dec!(75000),
        });

        let verdict = render_verdict(&comparison);

        assert!(verdict.starts_with("Old Regime saves ₹"));
        assert!(!verdict.contains('-'));
    }

    #[test]
    fn percentile_line() {
        let estimate = estimate_domestic_percentile(25000.0);

        assert_eq!(
            render_percentile(dec!(25000), &estimate),
            "Monthly income ₹25,000: Around 76.0th percentile of Indian earners"
        );
    }

    #[test]
    fn income_comparison_without_ppp_says_so() {
        let comparison = IncomeComparison {
            user_income: 1_250_000.0,
            user_income_ppp: None,
            ppp_year: None,
            groups: vec![GroupComparison {
                key: "g7",
                label: "G7",
                countries: vec![CountryIndicatorRecord {
                    code: "USA".to_string(),
                    name: "United States".to_string(),
                    mean_income: Some(85980.0),
                    mean_income_year: Some(2023),
                    gini: Some(41.3),
                    gini_year: Some(2022),
                    derived_percentile: None,
                }],
            }],
        };

        let report = render_income_comparison(&comparison);

        assert!(report.starts_with("Annual income ₹12,50,000"));
        assert!(report.contains("percentiles omitted"));
        assert!(report.contains("United States"));
        assert!(report.contains("$85,980"));
        assert!(report.contains("41.3"));
    }

    #[test]
    fn batch_table_has_header_and_rows() {
        let inputs = TaxInputs::default();
        let rows = vec![(
            Scenario {
                label: "default".to_string(),
                inputs,
            },
            compare_regimes(&inputs),
        )];

        let table = render_batch(&rows);
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Scenario"));
        assert!(lines[1].starts_with("default"));
        assert!(lines[1].ends_with("New Regime"));
    }
}
