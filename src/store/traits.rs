use crate::models::Listing;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for stores holding user-submitted listings.
/// The discovery engine only reads; the submission and moderation
/// flows write through the same handle.
#[async_trait]
pub trait SubmittedListingStore: Send + Sync {
    /// Read the full submitted catalog, in storage order.
    async fn read(&self) -> Result<Vec<Listing>>;

    /// Replace the stored catalog with the given listings.
    async fn write(&self, listings: &[Listing]) -> Result<()>;
}
