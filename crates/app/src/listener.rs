//! Offer-creation listeners used by the binary.

use vendkore_core::VendorId;
use vendkore_vending::{Offer, VendorListener};

/// Logs every created offer so an operator can review it before confirming.
pub struct LoggingListener;

impl VendorListener for LoggingListener {
    fn offer_created(&self, vendor_id: &VendorId, offer: &Offer) {
        tracing::info!(
            %vendor_id,
            offer_id = %offer.id(),
            entries = offer.entries().len(),
            "offer created"
        );
        for (index, entry) in offer.entries().iter().enumerate() {
            tracing::info!(
                index,
                name = entry.name(),
                price = entry.price(),
                count = entry.count(),
                "  entry"
            );
        }
    }
}
