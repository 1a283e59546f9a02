use crate::models::Listing;
use crate::store::traits::SubmittedListingStore;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

/// File-backed submitted-listings store: one JSON array in one file.
///
/// A missing file reads as an empty catalog; a corrupt file surfaces
/// as an error and is handled fail-open by the repository.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SubmittedListingStore for JsonFileStore {
    async fn read(&self) -> Result<Vec<Listing>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no submitted-listings file at {}", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(e).context(format!(
                    "Failed to read submitted listings from {}",
                    self.path.display()
                ))
            }
        };

        let listings: Vec<Listing> = serde_json::from_str(&raw).context(format!(
            "Failed to parse submitted listings in {}",
            self.path.display()
        ))?;

        debug!("read {} submitted listings from {}", listings.len(), self.path.display());

        Ok(listings)
    }

    async fn write(&self, listings: &[Listing]) -> Result<()> {
        let json = serde_json::to_string_pretty(listings)
            .context("Failed to serialize submitted listings")?;

        tokio::fs::write(&self.path, json).await.context(format!(
            "Failed to write submitted listings to {}",
            self.path.display()
        ))?;

        Ok(())
    }
}
