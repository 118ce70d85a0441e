mod country_indicator;
mod percentile;
mod regime;
mod regime_result;
mod slab;

pub use country_indicator::CountryIndicatorRecord;
pub use percentile::{PercentileAnchor, PercentileEstimate, PercentilePosition};
pub use regime::{RebatePolicy, RebateRule, RegimeConfig, RegimeId};
pub use regime_result::{RegimeResult, SlabBreakdown};
pub use slab::Slab;
