//! Environment-driven configuration for one storefront session.

use std::path::PathBuf;
use std::time::Duration;

/// Session configuration, read from the environment with logged dev
/// defaults (same convention as the rest of the env surface: set the
/// variable to override).
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenKore installation directory.
    pub openkore_home: PathBuf,
    /// Shop name written as the config header line.
    pub shop_name: String,
    /// JSON price table path.
    pub price_table: PathBuf,
    /// How long to let the bot run before reading its transcript.
    pub cart_wait: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        let openkore_home = std::env::var("OPENKORE_HOME").unwrap_or_else(|_| {
            tracing::warn!("OPENKORE_HOME not set; using ./openkore");
            "./openkore".to_string()
        });
        let shop_name = std::env::var("SHOP_NAME").unwrap_or_else(|_| {
            tracing::warn!("SHOP_NAME not set; using dev default");
            "Potions & More".to_string()
        });
        let price_table = std::env::var("PRICE_TABLE").unwrap_or_else(|_| {
            tracing::warn!("PRICE_TABLE not set; using ./prices.json");
            "./prices.json".to_string()
        });
        let cart_wait = parse_wait_secs(std::env::var("CART_WAIT_SECS").ok().as_deref());

        Self {
            openkore_home: PathBuf::from(openkore_home),
            shop_name,
            price_table: PathBuf::from(price_table),
            cart_wait,
        }
    }
}

/// The original automation gave the bot 25 seconds to log in and list its
/// cart; keep that as the default.
const DEFAULT_WAIT_SECS: u64 = 25;

fn parse_wait_secs(raw: Option<&str>) -> Duration {
    let secs = match raw {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(raw, "CART_WAIT_SECS is not a number; using default");
            DEFAULT_WAIT_SECS
        }),
        None => DEFAULT_WAIT_SECS,
    };
    Duration::from_secs(secs)
}
