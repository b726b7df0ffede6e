//! `vendkore-automation` — glue around the external bot process.
//!
//! The bot (OpenKore) runs as a separate process. This crate starts and
//! stops it, waits a bounded time for the console transcript to contain a
//! cart report, and persists the confirmed shop configuration where the bot
//! reads it. Nothing here holds domain logic; it adapts the filesystem and
//! process boundary to the core's capabilities.

pub mod error;
pub mod process;
pub mod session;
pub mod sink;

pub use error::AutomationError;
pub use process::{BotProcess, Openkore};
pub use session::acquire_cart;
pub use sink::FsShopConfigSink;
