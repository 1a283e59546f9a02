//! Store-side collaborators of the discovery engine: owner submission
//! and the admin approve/reject workflow. Both write through the same
//! `SubmittedListingStore` the repository reads from, so an approval
//! shows up on the next repository query.

use crate::models::{
    Category, Coordinates, GuestType, Listing, ListingOwner, VisibilityStatus,
};
use crate::store::SubmittedListingStore;
use anyhow::Result;
use chrono::Utc;
use tracing::info;

/// Owner-entered fields for a new listing. Everything else (id,
/// status, timestamp) is assigned at submission.
#[derive(Debug, Clone)]
pub struct ListingDraft {
    pub title: String,
    pub location: String,
    pub category: Category,
    pub allowed_guest: GuestType,
    pub price: String,
    pub price_value: i64,
    pub main_image: String,
    pub description: String,
    pub amenities: Vec<String>,
    pub coordinates: Coordinates,
    pub owner: Option<ListingOwner>,
}

/// Admin verdict on a pending listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

/// Append a new pending listing to the store and return it.
pub async fn submit_listing(
    store: &dyn SubmittedListingStore,
    draft: ListingDraft,
) -> Result<Listing> {
    let now = Utc::now();
    let listing = Listing {
        id: format!("sub_{}", now.timestamp_millis()),
        title: draft.title,
        location: draft.location,
        category: draft.category,
        allowed_guest: draft.allowed_guest,
        price: draft.price,
        price_value: draft.price_value.max(0),
        rating: 0.0,
        main_image: draft.main_image,
        gallery_images: Vec::new(),
        description: draft.description,
        amenities: draft.amenities,
        coordinates: draft.coordinates,
        status: VisibilityStatus::Pending,
        owner: draft.owner,
        submitted_at: Some(now),
    };

    let mut listings = store.read().await?;
    listings.push(listing.clone());
    store.write(&listings).await?;

    info!("submitted listing {} ({})", listing.id, listing.title);

    Ok(listing)
}

/// Listings awaiting a moderation decision, in storage order.
pub async fn pending_listings(store: &dyn SubmittedListingStore) -> Result<Vec<Listing>> {
    let listings = store.read().await?;
    Ok(listings
        .into_iter()
        .filter(|listing| listing.status == VisibilityStatus::Pending)
        .collect())
}

/// Apply a moderation decision. Returns false when no stored listing
/// has the given id.
pub async fn review_listing(
    store: &dyn SubmittedListingStore,
    id: &str,
    decision: Decision,
) -> Result<bool> {
    let mut listings = store.read().await?;

    let Some(listing) = listings.iter_mut().find(|listing| listing.id == id) else {
        return Ok(false);
    };

    listing.status = match decision {
        Decision::Approve => VisibilityStatus::Approved,
        Decision::Reject => VisibilityStatus::Rejected,
    };

    info!("listing {} {:?}", id, decision);

    store.write(&listings).await?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn draft() -> ListingDraft {
        ListingDraft {
            title: "Hilltop Annex Room".to_string(),
            location: "Bolwar".to_string(),
            category: Category::Pg,
            allowed_guest: GuestType::Any,
            price: "₹4,000".to_string(),
            price_value: 4_000,
            main_image: "https://img.example/annex.jpg".to_string(),
            description: "Single room above the family home.".to_string(),
            amenities: vec!["Parking".to_string()],
            coordinates: Coordinates { lat: 12.7685, lng: 75.2023 },
            owner: None,
        }
    }

    #[tokio::test]
    async fn submission_starts_pending() {
        let store = MemoryStore::new();
        let listing = submit_listing(&store, draft()).await.unwrap();

        assert_eq!(listing.status, VisibilityStatus::Pending);
        assert!(listing.id.starts_with("sub_"));
        assert!(listing.submitted_at.is_some());

        let pending = pending_listings(&store).await.unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, listing.id);
    }

    #[tokio::test]
    async fn review_updates_status_in_place() {
        let store = MemoryStore::new();
        let listing = submit_listing(&store, draft()).await.unwrap();

        assert!(review_listing(&store, &listing.id, Decision::Approve).await.unwrap());
        assert!(pending_listings(&store).await.unwrap().is_empty());

        let stored = store.read().await.unwrap();
        assert_eq!(stored[0].status, VisibilityStatus::Approved);
    }

    #[tokio::test]
    async fn review_of_unknown_id_is_a_no_op() {
        let store = MemoryStore::new();
        assert!(!review_listing(&store, "missing", Decision::Reject).await.unwrap());
    }

    #[tokio::test]
    async fn negative_draft_price_is_clamped() {
        let store = MemoryStore::new();
        let mut bad = draft();
        bad.price_value = -500;
        let listing = submit_listing(&store, bad).await.unwrap();
        assert_eq!(listing.price_value, 0);
    }
}
