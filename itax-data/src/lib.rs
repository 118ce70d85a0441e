//! Data access for the income tax estimator: taxpayer scenario files and
//! World Bank indicators used for cross-country income comparison.

pub mod cache;
pub mod compare;
pub mod groups;
pub mod indicators;
pub mod scenario;
pub mod source;
pub mod world_bank;

pub use cache::CachedIndicatorSource;
pub use compare::{GroupComparison, IncomeComparison, build_comparison, compare_income};
pub use groups::{COUNTRY_GROUPS, CountryGroup, all_country_codes};
pub use indicators::{Indicator, IndicatorError, IndicatorMap, IndicatorValue};
pub use scenario::{Scenario, ScenarioLoadError};
pub use source::{DirectoryIndicatorSource, IndicatorSource};
pub use world_bank::WorldBankClient;
