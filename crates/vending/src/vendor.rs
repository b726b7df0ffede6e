//! Vendor store and orchestration.
//!
//! A [`Vendor`] owns every offer created during one storefront session.
//! Creating or editing an offer stores it and notifies the registered
//! listeners synchronously, in registration order. Confirming an offer
//! renders it and persists the result through a [`ShopConfigSink`]; the
//! store itself is append-only for the session.

use std::collections::HashMap;
use std::sync::Arc;

use vendkore_cart::CartSnapshot;
use vendkore_core::{OfferId, VendingResult, VendorId};
use vendkore_pricing::{ItemDataProvider, PricePolicy, PricingError};

use crate::offer::Offer;
use crate::planner::OfferPlanner;
use crate::shop_config;

/// Callback invoked once per offer creation (initial or edited).
///
/// Listeners run synchronously in registration order; a listener must not
/// assume isolation from slow peers.
pub trait VendorListener: Send + Sync {
    fn offer_created(&self, vendor_id: &VendorId, offer: &Offer);
}

/// Destination for the rendered shop configuration.
pub trait ShopConfigSink {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn persist(&self, rendered: &str) -> Result<(), Self::Error>;
}

/// One storefront session: named shop, offer history, listeners.
pub struct Vendor {
    id: VendorId,
    shop_name: String,
    offers: HashMap<OfferId, Offer>,
    listeners: Vec<Arc<dyn VendorListener>>,
}

impl Vendor {
    pub fn new(shop_name: impl Into<String>) -> Self {
        Self::with_id(VendorId::new(), shop_name)
    }

    pub fn with_id(id: VendorId, shop_name: impl Into<String>) -> Self {
        Self {
            id,
            shop_name: shop_name.into(),
            offers: HashMap::new(),
            listeners: Vec::new(),
        }
    }

    pub fn id(&self) -> VendorId {
        self.id
    }

    pub fn shop_name(&self) -> &str {
        &self.shop_name
    }

    pub fn add_listener(&mut self, listener: Arc<dyn VendorListener>) {
        self.listeners.push(listener);
    }

    /// Plan an offer from the snapshot and store it. Returns the new offer's id.
    pub fn create_offer<P: PricePolicy>(
        &mut self,
        planner: &OfferPlanner<P>,
        snapshot: &CartSnapshot,
        provider: &dyn ItemDataProvider,
    ) -> Result<OfferId, PricingError> {
        let offer = planner.plan(snapshot, provider)?;
        let id = offer.id();
        self.put_offer(offer);
        Ok(id)
    }

    /// Store an externally constructed offer (e.g. replayed from history).
    pub fn put_offer(&mut self, offer: Offer) {
        let id = offer.id();
        self.offers.insert(id, offer);

        // Synchronous, registration-order dispatch; each listener completes
        // before the next begins.
        let offer = &self.offers[&id];
        for listener in &self.listeners {
            listener.offer_created(&self.id, offer);
        }

        tracing::debug!(vendor_id = %self.id, offer_id = %id, "offer stored");
    }

    /// Edit an offer's entry price; the edited offer is stored as a new offer.
    ///
    /// A validation failure leaves the store unchanged.
    pub fn modify_price(
        &mut self,
        offer: &Offer,
        index: usize,
        new_price: u64,
    ) -> VendingResult<OfferId> {
        let edited = offer.modify_price(index, new_price)?;
        let id = edited.id();
        self.put_offer(edited);
        Ok(id)
    }

    /// Edit an offer's entry count; the edited offer is stored as a new offer.
    pub fn modify_count(
        &mut self,
        offer: &Offer,
        index: usize,
        new_count: i64,
    ) -> VendingResult<OfferId> {
        let edited = offer.modify_count(index, new_count)?;
        let id = edited.id();
        self.put_offer(edited);
        Ok(id)
    }

    pub fn offer(&self, id: &OfferId) -> Option<&Offer> {
        self.offers.get(id)
    }

    /// Persist the offer with `id` as the active shop listing.
    ///
    /// An unknown id is a silent no-op: confirmation requests may race with
    /// offer expiry. The offer stays in the store either way.
    pub fn confirm_offer<S: ShopConfigSink>(
        &self,
        id: OfferId,
        sink: &S,
    ) -> Result<(), S::Error> {
        let Some(offer) = self.offers.get(&id) else {
            tracing::debug!(offer_id = %id, "confirm requested for unknown offer; ignoring");
            return Ok(());
        };

        let rendered = shop_config::render(&self.shop_name, offer);
        sink.persist(&rendered)?;
        tracing::info!(vendor_id = %self.id, offer_id = %id, "offer confirmed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;
    use std::sync::Mutex;

    use vendkore_core::VendingError;

    use crate::offer::ShopEntry;

    /// Records which listener saw which offer, in dispatch order.
    struct RecordingListener {
        tag: &'static str,
        seen: Arc<Mutex<Vec<(&'static str, OfferId)>>>,
    }

    impl VendorListener for RecordingListener {
        fn offer_created(&self, _vendor_id: &VendorId, offer: &Offer) {
            self.seen.lock().unwrap().push((self.tag, offer.id()));
        }
    }

    /// In-memory sink capturing everything persisted.
    #[derive(Default)]
    struct MemorySink {
        writes: Mutex<Vec<String>>,
    }

    impl ShopConfigSink for MemorySink {
        type Error = Infallible;

        fn persist(&self, rendered: &str) -> Result<(), Self::Error> {
            self.writes.lock().unwrap().push(rendered.to_string());
            Ok(())
        }
    }

    /// Sink that always fails.
    struct FailingSink;

    #[derive(Debug)]
    struct SinkFailure;

    impl ShopConfigSink for FailingSink {
        type Error = SinkFailure;

        fn persist(&self, _rendered: &str) -> Result<(), Self::Error> {
            Err(SinkFailure)
        }
    }

    fn sample_offer() -> Offer {
        Offer::new(vec![
            ShopEntry::new("Red Potion", 50, 3).unwrap(),
            ShopEntry::new("Jellopy", 7, 120).unwrap(),
        ])
    }

    #[test]
    fn put_offer_notifies_listeners_in_registration_order() {
        let mut vendor = Vendor::new("MyShop");
        let seen = Arc::new(Mutex::new(Vec::new()));
        vendor.add_listener(Arc::new(RecordingListener {
            tag: "first",
            seen: seen.clone(),
        }));
        vendor.add_listener(Arc::new(RecordingListener {
            tag: "second",
            seen: seen.clone(),
        }));

        let offer = sample_offer();
        let id = offer.id();
        vendor.put_offer(offer);

        let seen = seen.lock().unwrap();
        assert_eq!(seen.as_slice(), [("first", id), ("second", id)]);
    }

    #[test]
    fn edits_store_a_new_offer_and_keep_the_old_one() {
        let mut vendor = Vendor::new("MyShop");
        let offer = sample_offer();
        let original_id = offer.id();
        vendor.put_offer(offer.clone());

        let edited_id = vendor.modify_price(&offer, 0, 500).unwrap();
        assert_ne!(original_id, edited_id);
        assert_eq!(vendor.offer(&original_id).unwrap().entries()[0].price(), 50);
        assert_eq!(vendor.offer(&edited_id).unwrap().entries()[0].price(), 500);
    }

    #[test]
    fn count_edits_store_a_new_offer_and_notify_listeners() {
        let mut vendor = Vendor::new("MyShop");
        let seen = Arc::new(Mutex::new(Vec::new()));
        vendor.add_listener(Arc::new(RecordingListener {
            tag: "only",
            seen: seen.clone(),
        }));

        let offer = sample_offer();
        let original_id = offer.id();
        vendor.put_offer(offer.clone());

        let edited_id = vendor.modify_count(&offer, 1, 60).unwrap();
        assert_ne!(original_id, edited_id);
        assert_eq!(vendor.offer(&original_id).unwrap().entries()[1].count(), 120);
        assert_eq!(vendor.offer(&edited_id).unwrap().entries()[1].count(), 60);

        let seen = seen.lock().unwrap();
        assert_eq!(seen.as_slice(), [("only", original_id), ("only", edited_id)]);
    }

    #[test]
    fn failed_edit_leaves_the_store_unchanged() {
        let mut vendor = Vendor::new("MyShop");
        let seen = Arc::new(Mutex::new(Vec::new()));
        vendor.add_listener(Arc::new(RecordingListener {
            tag: "only",
            seen: seen.clone(),
        }));

        let offer = sample_offer();
        vendor.put_offer(offer.clone());
        let notified_before = seen.lock().unwrap().len();

        let err = vendor.modify_count(&offer, 0, -1).unwrap_err();
        assert_eq!(err, VendingError::InvalidCount(-1));
        assert_eq!(seen.lock().unwrap().len(), notified_before);
    }

    #[test]
    fn confirm_persists_the_rendered_config() {
        let mut vendor = Vendor::new("MyShop");
        let offer = Offer::new(vec![ShopEntry::new("Potion", 50, 3).unwrap()]);
        let id = offer.id();
        vendor.put_offer(offer);

        let sink = MemorySink::default();
        vendor.confirm_offer(id, &sink).unwrap();

        let writes = sink.writes.lock().unwrap();
        assert_eq!(writes.as_slice(), ["MyShop\n\nPotion\t50\t3\n"]);
    }

    #[test]
    fn confirm_of_unknown_id_is_a_silent_no_op() {
        let vendor = Vendor::new("MyShop");
        let sink = MemorySink::default();
        vendor.confirm_offer(OfferId::new(), &sink).unwrap();
        assert!(sink.writes.lock().unwrap().is_empty());
    }

    #[test]
    fn confirm_does_not_remove_the_offer() {
        let mut vendor = Vendor::new("MyShop");
        let offer = sample_offer();
        let id = offer.id();
        vendor.put_offer(offer);

        let sink = MemorySink::default();
        vendor.confirm_offer(id, &sink).unwrap();
        assert!(vendor.offer(&id).is_some());
    }

    #[test]
    fn persistence_failure_surfaces_and_store_is_unaffected() {
        let mut vendor = Vendor::new("MyShop");
        let offer = sample_offer();
        let id = offer.id();
        vendor.put_offer(offer);

        assert!(vendor.confirm_offer(id, &FailingSink).is_err());
        assert!(vendor.offer(&id).is_some());
    }
}
