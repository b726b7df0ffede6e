//! Immutable offer value type and its copy-on-edit operations.

use serde::{Deserialize, Serialize};

use vendkore_core::{OfferId, VendingError, VendingResult};

/// One priced, counted line item within an offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopEntry {
    name: String,
    /// Sale price in zeny; strictly positive.
    price: u64,
    /// Quantity offered; non-negative. May legitimately differ from the
    /// originally observed cart quantity after a manual edit.
    count: i64,
}

impl ShopEntry {
    pub fn new(name: impl Into<String>, price: u64, count: i64) -> VendingResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(VendingError::validation("shop entry name cannot be empty"));
        }
        if price == 0 {
            return Err(VendingError::InvalidPrice(price));
        }
        if count < 0 {
            return Err(VendingError::InvalidCount(count));
        }
        Ok(Self { name, price, count })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn count(&self) -> i64 {
        self.count
    }
}

/// A proposed (or confirmed) full shop listing.
///
/// Offers are immutable: every edit yields a **new** offer with a fresh id,
/// leaving the edited offer unchanged. This gives history/undo for free and
/// makes concurrent inspection safe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    id: OfferId,
    entries: Vec<ShopEntry>,
}

impl Offer {
    pub fn new(entries: Vec<ShopEntry>) -> Self {
        Self {
            id: OfferId::new(),
            entries,
        }
    }

    pub fn id(&self) -> OfferId {
        self.id
    }

    pub fn entries(&self) -> &[ShopEntry] {
        &self.entries
    }

    /// New offer with entry `index`'s price replaced.
    pub fn modify_price(&self, index: usize, new_price: u64) -> VendingResult<Offer> {
        self.check_index(index)?;
        if new_price == 0 {
            return Err(VendingError::InvalidPrice(new_price));
        }

        let mut entries = self.entries.clone();
        entries[index].price = new_price;
        Ok(Offer::new(entries))
    }

    /// New offer with entry `index`'s count replaced.
    ///
    /// Deliberately does not re-validate against the original cart quantity:
    /// count edits are a manual override step.
    pub fn modify_count(&self, index: usize, new_count: i64) -> VendingResult<Offer> {
        self.check_index(index)?;
        if new_count < 0 {
            return Err(VendingError::InvalidCount(new_count));
        }

        let mut entries = self.entries.clone();
        entries[index].count = new_count;
        Ok(Offer::new(entries))
    }

    fn check_index(&self, index: usize) -> VendingResult<()> {
        if index >= self.entries.len() {
            return Err(VendingError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(())
    }
}
