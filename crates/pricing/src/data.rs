//! Market price record for a single item.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vendkore_core::{VendingError, VendingResult};

/// Price information observed for one item on the market.
///
/// Prices are integer zeny. The average vending price is what comparable
/// shops currently charge and is the input to the pricing policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemData {
    name: String,
    /// Average vending price across observed shops, in zeny.
    average_vend_price: u64,
    /// When the market was last observed for this item.
    observed_at: DateTime<Utc>,
}

impl ItemData {
    pub fn new(
        name: impl Into<String>,
        average_vend_price: u64,
        observed_at: DateTime<Utc>,
    ) -> VendingResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(VendingError::validation("item data name cannot be empty"));
        }
        if average_vend_price == 0 {
            return Err(VendingError::validation(
                "average vend price must be strictly positive",
            ));
        }
        Ok(Self {
            name,
            average_vend_price,
            observed_at,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn average_vend_price(&self) -> u64 {
        self.average_vend_price
    }

    pub fn observed_at(&self) -> DateTime<Utc> {
        self.observed_at
    }
}
