//! `vendkore-vending` — offers, planning, and the vendor store.
//!
//! An [`Offer`] is an immutable priced listing derived from a cart snapshot.
//! Edits never mutate in place; they produce a new offer with a fresh id,
//! which keeps every earlier offer inspectable for the whole session. The
//! [`Vendor`] store holds all offers created in a session and persists the
//! confirmed one through a [`ShopConfigSink`].

pub mod offer;
pub mod planner;
pub mod shop_config;
pub mod vendor;


pub use offer::{Offer, ShopEntry};
pub use planner::OfferPlanner;
pub use shop_config::render;
pub use vendor::{ShopConfigSink, Vendor, VendorListener};
