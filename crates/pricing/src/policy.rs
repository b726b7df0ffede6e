//! Sale price policy.

use crate::data::ItemData;

use vendkore_core::{VendingError, VendingResult};

/// Deterministic sale price from the cart count and market data.
///
/// The same `(count, data)` pair must always yield the same price; the
/// planner relies on this for reproducible offers.
pub trait PricePolicy {
    fn sale_price(&self, count: i64, data: &ItemData) -> u64;
}

/// Undercut the observed average vending price by a fixed fraction.
///
/// Sale price = average vend price minus `undercut_bps` basis points of it,
/// floored at 1 zeny. Integer math only, so formatting the result never
/// loses precision. The cart count does not influence the unit price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndercutPolicy {
    undercut_bps: u32,
}

impl UndercutPolicy {
    /// `undercut_bps` is the markdown in basis points (100 bps = 1%) and
    /// must be below 10_000 (a 100% markdown would zero every price).
    pub fn new(undercut_bps: u32) -> VendingResult<Self> {
        if undercut_bps >= 10_000 {
            return Err(VendingError::validation(format!(
                "undercut must be below 10000 bps, got {undercut_bps}"
            )));
        }
        Ok(Self { undercut_bps })
    }
}

impl Default for UndercutPolicy {
    /// 5% below the observed average.
    fn default() -> Self {
        Self { undercut_bps: 500 }
    }
}

impl PricePolicy for UndercutPolicy {
    fn sale_price(&self, _count: i64, data: &ItemData) -> u64 {
        let avg = data.average_vend_price() as u128;
        let cut = avg * self.undercut_bps as u128 / 10_000;
        // avg >= 1 and cut < avg, so this stays in u64 range.
        ((avg - cut) as u64).max(1)
    }
}
