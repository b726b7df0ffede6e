//! `vendkore-cart` — cart inventory model and console-log parser.
//!
//! The automation bot reports its cart contents to an append-only console
//! transcript. This crate extracts the most recent cart report from that
//! text as a [`CartSnapshot`].

pub mod item;
pub mod parser;

pub use item::{CartItem, CartSnapshot};
pub use parser::{CART_BANNER, CartParseError, parse};
