//! Item price lookup providers.
//!
//! [`ItemDataProvider`] is the seam between planning and the market data
//! source. Lookups may be slow (the real source is a remote scrape); the
//! core only requires that they are deterministic for the same inputs and
//! that an unknown item resolves to `None` rather than an error.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use crate::data::ItemData;

#[derive(Debug, Error)]
pub enum PricingError {
    #[error("failed to read price table {path}: {source}")]
    TableRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse price table {path}: {source}")]
    TableParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid price table entry for {item:?}: {reason}")]
    InvalidEntry { item: String, reason: String },
}

/// Lookup from item name to market price information.
pub trait ItemDataProvider {
    /// Resolve price information for `name`.
    ///
    /// `Ok(None)` means the source does not know the item; callers must
    /// tolerate this without failing their whole operation.
    fn item_data(&self, name: &str) -> Result<Option<ItemData>, PricingError>;
}

impl<P> ItemDataProvider for &P
where
    P: ItemDataProvider + ?Sized,
{
    fn item_data(&self, name: &str) -> Result<Option<ItemData>, PricingError> {
        (**self).item_data(name)
    }
}

/// In-memory provider for tests/dev.
#[derive(Debug, Default)]
pub struct StaticItemDataProvider {
    items: HashMap<String, ItemData>,
}

impl StaticItemDataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, data: ItemData) {
        self.items.insert(data.name().to_string(), data);
    }
}

impl FromIterator<ItemData> for StaticItemDataProvider {
    fn from_iter<I: IntoIterator<Item = ItemData>>(iter: I) -> Self {
        let mut provider = Self::new();
        for data in iter {
            provider.insert(data);
        }
        provider
    }
}

impl ItemDataProvider for StaticItemDataProvider {
    fn item_data(&self, name: &str) -> Result<Option<ItemData>, PricingError> {
        Ok(self.items.get(name).cloned())
    }
}

/// One row of the on-disk price table.
#[derive(Debug, Deserialize)]
struct PriceTableEntry {
    average_vend_price: u64,
    /// Absent in hand-maintained tables; the load time is used instead.
    observed_at: Option<DateTime<Utc>>,
}

/// Provider backed by a JSON price table on disk.
///
/// The table maps item name to its market record:
///
/// ```json
/// { "Red Potion": { "average_vend_price": 50 } }
/// ```
///
/// The whole table is loaded eagerly; lookups are cheap map hits.
#[derive(Debug)]
pub struct JsonFileItemDataProvider {
    items: HashMap<String, ItemData>,
}

impl JsonFileItemDataProvider {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PricingError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| PricingError::TableRead {
            path: path.to_path_buf(),
            source,
        })?;
        let provider = Self::from_json_str(&text).map_err(|e| match e {
            PricingError::TableParse { source, .. } => PricingError::TableParse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        tracing::info!(path = %path.display(), items = provider.items.len(), "loaded price table");
        Ok(provider)
    }

    pub fn from_json_str(text: &str) -> Result<Self, PricingError> {
        let table: HashMap<String, PriceTableEntry> =
            serde_json::from_str(text).map_err(|source| PricingError::TableParse {
                path: PathBuf::new(),
                source,
            })?;

        let loaded_at = Utc::now();
        let mut items = HashMap::with_capacity(table.len());
        for (name, entry) in table {
            let observed_at = entry.observed_at.unwrap_or(loaded_at);
            let data = ItemData::new(&name, entry.average_vend_price, observed_at).map_err(
                |e| PricingError::InvalidEntry {
                    item: name.clone(),
                    reason: e.to_string(),
                },
            )?;
            items.insert(name, data);
        }

        Ok(Self { items })
    }
}

impl ItemDataProvider for JsonFileItemDataProvider {
    fn item_data(&self, name: &str) -> Result<Option<ItemData>, PricingError> {
        Ok(self.items.get(name).cloned())
    }
}
