//! Configuration and category files served over HTTP.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use data_loader::parser::{parse_config, parse_records, record_location};
use data_loader::{CollectionConfig, Movie};

use crate::traits::{ConfigProvider, RecordSource};

/// Fetches documents with HTTP GET.
///
/// Relative locations are appended to the base URL, so a base of
/// `http://host/` and a resource path of `app/resources/movies/` read
/// `http://host/app/resources/movies/English/Action.json`.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Full URL for `location`.
    pub fn resolve(&self, location: &str) -> String {
        if crate::is_remote(location) {
            return location.to_string();
        }
        let base = self.base_url.trim_end_matches('/');
        let location = location.trim_start_matches('/');
        format!("{base}/{location}")
    }

    async fn get(&self, location: &str) -> Result<String> {
        let url = self.resolve(location);
        debug!("GET {}", url);
        let text = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Request to {url} failed"))?
            .error_for_status()
            .with_context(|| format!("Request to {url} was rejected"))?
            .text()
            .await
            .with_context(|| format!("Reading body of {url} failed"))?;
        Ok(text)
    }
}

#[async_trait]
impl ConfigProvider for HttpSource {
    async fn fetch_config(&self, location: &str) -> Result<CollectionConfig> {
        let text = self.get(location).await?;
        Ok(parse_config(&text, location)?)
    }
}

#[async_trait]
impl RecordSource for HttpSource {
    async fn fetch_records(
        &self,
        resource_path: &str,
        language: &str,
        category: &str,
    ) -> Result<Vec<Movie>> {
        let location = record_location(resource_path, language, category)?;
        let text = self.get(&location).await?;
        let movies = parse_records(&text, &location)?;
        debug!("Fetched {} records from {}", movies.len(), location);
        Ok(movies)
    }
}
