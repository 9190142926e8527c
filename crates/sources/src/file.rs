//! Configuration and category files on the local filesystem.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

use data_loader::parser::{io_error, parse_config, parse_records, record_location};
use data_loader::{CollectionConfig, Movie};

use crate::traits::{ConfigProvider, RecordSource};

/// Reads documents from disk, resolving locations against a root directory.
///
/// Absolute locations are used as they are.
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, location: &str) -> PathBuf {
        self.root.join(location)
    }

    async fn read(&self, location: &str) -> Result<String> {
        let path = self.resolve(location);
        debug!("Reading {}", path.display());
        let text = tokio::fs::read_to_string(&path)
            .await
            .map_err(|err| io_error(err, &path.display().to_string()))?;
        Ok(text)
    }
}

#[async_trait]
impl ConfigProvider for FileSource {
    async fn fetch_config(&self, location: &str) -> Result<CollectionConfig> {
        let text = self
            .read(location)
            .await
            .with_context(|| format!("Failed to read configuration {location}"))?;
        Ok(parse_config(&text, location)?)
    }
}

#[async_trait]
impl RecordSource for FileSource {
    async fn fetch_records(
        &self,
        resource_path: &str,
        language: &str,
        category: &str,
    ) -> Result<Vec<Movie>> {
        let location = record_location(resource_path, language, category)?;
        let text = self
            .read(&location)
            .await
            .with_context(|| format!("Failed to read {category} records"))?;
        let movies = parse_records(&text, &location)?;
        debug!("Loaded {} records from {}", movies.len(), location);
        Ok(movies)
    }
}
