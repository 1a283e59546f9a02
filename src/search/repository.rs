use crate::models::{Listing, VisibilityStatus};
use crate::store::SubmittedListingStore;
use std::sync::Arc;
use tracing::{debug, warn};

/// Merges the immutable built-in catalog with the externally persisted
/// submitted catalog and applies the display-readiness gates.
pub struct ListingRepository {
    built_in: Vec<Listing>,
    store: Arc<dyn SubmittedListingStore>,
}

impl ListingRepository {
    pub fn new(built_in: Vec<Listing>, store: Arc<dyn SubmittedListingStore>) -> Self {
        Self { built_in, store }
    }

    /// All listings eligible for the public discovery flow, in the
    /// default tiebreak order: built-in catalog order, then submitted
    /// storage order.
    ///
    /// The submitted store is read fresh on every call since the
    /// moderation flow mutates it. A store failure reads as an empty
    /// submitted catalog and is never surfaced.
    pub async fn discoverable(&self) -> Vec<Listing> {
        let submitted = match self.store.read().await {
            Ok(listings) => listings,
            Err(e) => {
                warn!("submitted-listings store unreadable, treating as empty: {e:#}");
                Vec::new()
            }
        };

        let approved_submitted = submitted
            .into_iter()
            .filter(|listing| listing.status == VisibilityStatus::Approved);

        let listings: Vec<Listing> = self
            .built_in
            .iter()
            .cloned()
            .chain(approved_submitted)
            .filter(|listing| !listing.main_image.trim().is_empty())
            .collect();

        debug!("{} discoverable listings", listings.len());

        listings
    }
}
