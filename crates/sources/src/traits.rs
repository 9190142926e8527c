//! The two data contracts the shelf consumes.

use anyhow::Result;
use async_trait::async_trait;
use data_loader::{CollectionConfig, Movie};

/// Supplies the collection configuration.
///
/// Read once at startup (and again on an explicit reload of the
/// configuration); the result seeds the filter state.
#[async_trait]
pub trait ConfigProvider: Send + Sync {
    async fn fetch_config(&self, location: &str) -> Result<CollectionConfig>;
}

/// Supplies the records stored for one `(language, category)` pair.
///
/// A fetch either resolves with the whole batch, in stored order, or fails;
/// there is no partial result.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch_records(
        &self,
        resource_path: &str,
        language: &str,
        category: &str,
    ) -> Result<Vec<Movie>>;
}
