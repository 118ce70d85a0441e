use rust_decimal::Decimal;
use serde::Serialize;

/// One bracket of a progressive rate table.
///
/// `upper_bound` is `None` for the final, open-ended slab. Tables list slabs
/// in increasing `upper_bound` order; the lower bound of each slab is the
/// previous slab's upper bound (zero for the first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slab {
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
    pub label: &'static str,
}

impl Slab {
    /// Width of the slab given the previous slab's upper bound.
    /// `None` means the slab is unbounded.
    pub fn span(
        &self,
        lower_bound: Decimal,
    ) -> Option<Decimal> {
        self.upper_bound.map(|upper| upper - lower_bound)
    }
}
