//! `vendkore-pricing` — market price data and pricing policy.
//!
//! The planner consumes an [`ItemDataProvider`]: a lookup from item name to
//! market price information. An item unknown to the price source resolves to
//! `None` and must never fail planning as a whole. The [`PricePolicy`] turns
//! a lookup result plus the cart count into a deterministic sale price.

pub mod data;
pub mod policy;
pub mod provider;

pub use data::ItemData;
pub use policy::{PricePolicy, UndercutPolicy};
pub use provider::{
    ItemDataProvider, JsonFileItemDataProvider, PricingError, StaticItemDataProvider,
};
