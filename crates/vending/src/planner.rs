//! Offer planning: cart snapshot + market data → priced offer.

use vendkore_cart::CartSnapshot;
use vendkore_pricing::{ItemDataProvider, PricePolicy, PricingError, UndercutPolicy};

use crate::offer::{Offer, ShopEntry};

/// Plans an offer from a cart snapshot using a price provider and policy.
///
/// Items are processed sequentially in snapshot order; an item the provider
/// does not know is skipped (logged), never a planning failure. Surviving
/// entries keep the relative order of their cart items, and each entry's
/// count equals its cart item's count.
#[derive(Debug, Clone)]
pub struct OfferPlanner<P = UndercutPolicy> {
    policy: P,
}

impl OfferPlanner<UndercutPolicy> {
    pub fn new() -> Self {
        Self {
            policy: UndercutPolicy::default(),
        }
    }
}

impl Default for OfferPlanner<UndercutPolicy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PricePolicy> OfferPlanner<P> {
    pub fn with_policy(policy: P) -> Self {
        Self { policy }
    }

    pub fn plan(
        &self,
        snapshot: &CartSnapshot,
        provider: &dyn ItemDataProvider,
    ) -> Result<Offer, PricingError> {
        let mut entries = Vec::with_capacity(snapshot.len());

        for item in snapshot.items() {
            let Some(data) = provider.item_data(item.name())? else {
                tracing::warn!(item = item.name(), "no price information; skipping item");
                continue;
            };

            let price = self.policy.sale_price(item.count(), &data);
            let entry = ShopEntry::new(item.name(), price, item.count()).map_err(|e| {
                PricingError::InvalidEntry {
                    item: item.name().to_string(),
                    reason: e.to_string(),
                }
            })?;
            entries.push(entry);
        }

        let offer = Offer::new(entries);
        tracing::debug!(
            offer_id = %offer.id(),
            entries = offer.entries().len(),
            cart_items = snapshot.len(),
            "planned offer"
        );
        Ok(offer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use vendkore_cart::CartItem;
    use vendkore_pricing::{ItemData, StaticItemDataProvider};

    fn snapshot(items: &[(&str, i64)]) -> CartSnapshot {
        CartSnapshot::new(
            items
                .iter()
                .map(|(name, count)| CartItem::new(*name, *count).unwrap())
                .collect(),
        )
    }

    fn provider(items: &[(&str, u64)]) -> StaticItemDataProvider {
        items
            .iter()
            .map(|(name, price)| ItemData::new(*name, *price, Utc::now()).unwrap())
            .collect()
    }

    #[test]
    fn preserves_snapshot_order() {
        let planner = OfferPlanner::new();
        let snapshot = snapshot(&[("X", 1), ("Y", 2), ("Z", 3)]);
        let provider = provider(&[("X", 100), ("Y", 100), ("Z", 100)]);

        let offer = planner.plan(&snapshot, &provider).unwrap();
        let names: Vec<&str> = offer.entries().iter().map(|e| e.name()).collect();
        assert_eq!(names, ["X", "Y", "Z"]);
    }

    #[test]
    fn entry_counts_match_the_cart() {
        let planner = OfferPlanner::new();
        let snapshot = snapshot(&[("Red Potion", 10), ("Jellopy", 250)]);
        let provider = provider(&[("Red Potion", 50), ("Jellopy", 7)]);

        let offer = planner.plan(&snapshot, &provider).unwrap();
        assert_eq!(offer.entries()[0].count(), 10);
        assert_eq!(offer.entries()[1].count(), 250);
    }

    #[test]
    fn unpriced_items_are_skipped_in_order() {
        let planner = OfferPlanner::new();
        let snapshot = snapshot(&[("A", 1), ("Unknown Relic", 1), ("C", 1)]);
        let provider = provider(&[("A", 100), ("C", 300)]);

        let offer = planner.plan(&snapshot, &provider).unwrap();
        let names: Vec<&str> = offer.entries().iter().map(|e| e.name()).collect();
        assert_eq!(names, ["A", "C"]);
    }

    #[test]
    fn planning_an_empty_snapshot_yields_an_empty_offer() {
        let planner = OfferPlanner::new();
        let offer = planner
            .plan(&CartSnapshot::default(), &StaticItemDataProvider::new())
            .unwrap();
        assert!(offer.entries().is_empty());
    }

    #[test]
    fn replanning_yields_identical_entries_with_fresh_id() {
        let planner = OfferPlanner::new();
        let snapshot = snapshot(&[("Red Potion", 10)]);
        let provider = provider(&[("Red Potion", 1000)]);

        let first = planner.plan(&snapshot, &provider).unwrap();
        let second = planner.plan(&snapshot, &provider).unwrap();
        assert_eq!(first.entries(), second.entries());
        assert_ne!(first.id(), second.id());
    }
}
