use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::{debug, info};

use itax_cli::config::AppConfig;
use itax_cli::utils::{SlabRange, parse_amount, parse_regime, parse_slab_range};
use itax_cli::{logging, report};
use itax_core::{RegimeId, TaxInputs, compare_regimes, estimate_domestic_percentile};
use itax_data::{
    CachedIndicatorSource, DirectoryIndicatorSource, IndicatorSource, WorldBankClient,
    compare_income, scenario,
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Indian personal income tax estimator, FY 2025-26.
///
/// Amounts accept comma grouping, an optional ₹ prefix and lakh/crore
/// suffixes, e.g. `12,50,000`, `₹12.5L`, `1.2 crore`.
#[derive(Debug, Parser)]
#[command(name = "itax", version)]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level regardless of configuration.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute tax under both regimes and compare them.
    Tax {
        /// Gross annual income.
        #[arg(long, value_parser = parse_amount)]
        income: Decimal,

        /// Deductions claimed under the old regime.
        #[arg(long, value_parser = parse_amount, default_value = "0")]
        old_deductions: Decimal,

        /// Deductions claimed under the new regime.
        #[arg(long, value_parser = parse_amount, default_value = "0")]
        new_deductions: Decimal,

        /// Show only this regime (`old` or `new`).
        #[arg(long, value_parser = parse_regime)]
        regime: Option<RegimeId>,

        /// Also print the tax from a run of slabs, e.g. `2..4`, numbered from 1.
        #[arg(long, value_parser = parse_slab_range)]
        slabs: Option<SlabRange>,
    },

    /// Where a monthly income sits among Indian earners.
    Percentile {
        /// Gross annual income.
        #[arg(long, value_parser = parse_amount)]
        income: Decimal,
    },

    /// Compare an income against other countries' distributions.
    Compare {
        /// Gross annual income.
        #[arg(long, value_parser = parse_amount)]
        income: Decimal,
    },

    /// Compare regimes for every scenario in a CSV file.
    Batch {
        #[arg(long)]
        file: PathBuf,
    },
}

// ─── commands ────────────────────────────────────────────────────────────────

fn run_tax(
    inputs: TaxInputs,
    regime: Option<RegimeId>,
    slabs: Option<SlabRange>,
) {
    let comparison = compare_regimes(&inputs);
    let regimes = match regime {
        Some(regime) => {
            let result = comparison.result(regime);
            println!("{}", report::render_regime(regime, result, inputs.annual_income));
            vec![regime]
        }
        None => {
            println!("{}", report::render_tax_report(&inputs, &comparison));
            vec![RegimeId::Old, RegimeId::New]
        }
    };

    if let Some(range) = slabs {
        println!();
        for regime in regimes {
            let result = comparison.result(regime);
            println!("{}", report::render_slab_range(regime, result, range));
        }
    }
}

fn run_percentile(annual_income: Decimal) -> anyhow::Result<()> {
    let monthly = TaxInputs {
        annual_income,
        ..TaxInputs::default()
    }
    .monthly_income();
    let monthly_f64 = monthly
        .to_f64()
        .context("monthly income is not representable as a float")?;

    let estimate = estimate_domestic_percentile(monthly_f64);
    debug!(percentile = estimate.percentile, position = ?estimate.position, "domestic percentile");
    println!("{}", report::render_percentile(monthly, &estimate));
    Ok(())
}

fn indicator_source(config: &AppConfig) -> anyhow::Result<Box<dyn IndicatorSource>> {
    let inner: Box<dyn IndicatorSource> = match &config.indicator_dir {
        Some(dir) => {
            info!(dir = %dir.display(), "using saved indicator files");
            Box::new(DirectoryIndicatorSource::new(dir))
        }
        None => Box::new(
            WorldBankClient::new(&config.world_bank_url, config.request_timeout())
                .context("failed to create World Bank client")?,
        ),
    };
    Ok(Box::new(CachedIndicatorSource::new(inner, config.cache_ttl())))
}

async fn run_compare(
    config: &AppConfig,
    annual_income: Decimal,
) -> anyhow::Result<()> {
    let income = annual_income
        .to_f64()
        .context("income is not representable as a float")?;
    let source = indicator_source(config)?;

    let comparison = compare_income(source.as_ref(), income)
        .await
        .context("cross-country comparison failed")?;
    println!("{}", report::render_income_comparison(&comparison));
    Ok(())
}

fn run_batch(file: &Path) -> anyhow::Result<()> {
    let scenarios = scenario::load_from_file(file)
        .with_context(|| format!("failed to load scenarios from {}", file.display()))?;
    info!(count = scenarios.len(), "scenarios loaded");

    let rows: Vec<_> = scenarios
        .into_iter()
        .map(|s| {
            let comparison = compare_regimes(&s.inputs);
            (s, comparison)
        })
        .collect();
    println!("{}", report::render_batch(&rows));
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config =
        AppConfig::load_or_default(cli.config.as_deref()).context("failed to load configuration")?;

    logging::init_logging(&config.log_level)?;
    if cli.verbose {
        logging::set_log_level("debug")?;
    }
    if let Some(path) = &config.log_file {
        logging::enable_file_logging(path)?;
    }
    debug!(?config, "configuration loaded");

    match cli.command {
        Command::Tax {
            income,
            old_deductions,
            new_deductions,
            regime,
            slabs,
        } => {
            let inputs = TaxInputs {
                annual_income: income,
                old_deductions,
                new_deductions,
            };
            run_tax(inputs, regime, slabs);
            Ok(())
        }
        Command::Percentile { income } => run_percentile(income),
        Command::Compare { income } => run_compare(&config, income).await,
        Command::Batch { file } => run_batch(&file),
    }
}
