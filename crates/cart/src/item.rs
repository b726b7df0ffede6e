//! Cart inventory value types.

use serde::{Deserialize, Serialize};

use vendkore_core::{VendingError, VendingResult};

/// One distinct item and quantity currently available to sell.
///
/// Immutable; constructed only by the log parser (and test helpers).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    name: String,
    count: i64,
}

impl CartItem {
    /// Create a cart item. The name must be non-empty after trimming and the
    /// count strictly positive.
    pub fn new(name: impl Into<String>, count: i64) -> VendingResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(VendingError::validation("cart item name cannot be empty"));
        }
        if count <= 0 {
            return Err(VendingError::validation(format!(
                "cart item count must be positive, got {count}"
            )));
        }
        Ok(Self { name, count })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn count(&self) -> i64 {
        self.count
    }
}

/// Ordered cart contents at one point in time.
///
/// Only the most recently observed snapshot in a transcript is meaningful;
/// earlier ones are superseded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSnapshot {
    items: Vec<CartItem>,
}

impl CartSnapshot {
    pub fn new(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl IntoIterator for CartSnapshot {
    type Item = CartItem;
    type IntoIter = std::vec::IntoIter<CartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
