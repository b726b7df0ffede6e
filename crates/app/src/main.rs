mod config;
mod listener;

use std::sync::Arc;

use anyhow::Context;

use vendkore_automation::{FsShopConfigSink, Openkore, acquire_cart};
use vendkore_pricing::JsonFileItemDataProvider;
use vendkore_vending::{OfferPlanner, Vendor};

use crate::config::Config;
use crate::listener::LoggingListener;

fn main() -> anyhow::Result<()> {
    vendkore_observability::init();

    let config = Config::from_env();
    tracing::info!(?config, "starting storefront session");

    let provider = JsonFileItemDataProvider::load(&config.price_table)
        .context("loading price table")?;

    let mut kore = Openkore::new(&config.openkore_home);
    let snapshot = acquire_cart(&mut kore, config.cart_wait)
        .context("acquiring cart snapshot")?;

    let Some(snapshot) = snapshot else {
        tracing::warn!(
            wait_secs = config.cart_wait.as_secs(),
            "no cart report in the console log; try a longer CART_WAIT_SECS"
        );
        return Ok(());
    };
    tracing::info!(items = snapshot.len(), "cart snapshot acquired");

    let planner = OfferPlanner::new();
    let mut vendor = Vendor::new(&config.shop_name);
    vendor.add_listener(Arc::new(LoggingListener));

    let offer_id = vendor
        .create_offer(&planner, &snapshot, &provider)
        .context("planning offer")?;

    let sink = FsShopConfigSink::for_bot(&kore);
    vendor
        .confirm_offer(offer_id, &sink)
        .context("persisting shop config")?;

    tracing::info!(path = %sink.path().display(), "shop config updated; restart the bot to vend");
    Ok(())
}
