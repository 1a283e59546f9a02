use crate::models::Listing;
use crate::store::traits::SubmittedListingStore;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Mutex;

/// In-memory submitted-listings store for tests and demos.
#[derive(Default)]
pub struct MemoryStore {
    listings: Mutex<Vec<Listing>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listings(listings: Vec<Listing>) -> Self {
        Self { listings: Mutex::new(listings) }
    }
}

#[async_trait]
impl SubmittedListingStore for MemoryStore {
    async fn read(&self) -> Result<Vec<Listing>> {
        Ok(self.listings.lock().expect("store lock poisoned").clone())
    }

    async fn write(&self, listings: &[Listing]) -> Result<()> {
        *self.listings.lock().expect("store lock poisoned") = listings.to_vec();
        Ok(())
    }
}
