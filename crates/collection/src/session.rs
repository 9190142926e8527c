//! The shelf as the presentation layer sees it.
//!
//! A `ShelfSession` owns the single filter state of a session, the
//! aggregator that turns it into a collection, and the row editor. Every
//! filter change goes through one of the methods below and starts a fresh
//! reload; the caller then drives the reload with [`ShelfSession::settle`]
//! or [`ShelfSession::next_arrival`].

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing::info;

use data_loader::{CollectionConfig, Movie};
use pipeline::{FilterEngine, FilterState};
use sources::{ConfigProvider, RecordSource};

use crate::aggregator::{BatchOutcome, CollectionAggregator, ReloadPhase};
use crate::editor::{DraftTarget, EditError, RowEditor};

#[derive(Debug)]
pub struct ShelfSession {
    state: FilterState,
    resource_path: String,
    aggregator: CollectionAggregator,
    editor: RowEditor,
}

impl ShelfSession {
    /// Load the configuration at `config_location` and start the first
    /// reload.
    pub async fn open(
        provider: &dyn ConfigProvider,
        config_location: &str,
        source: Arc<dyn RecordSource>,
    ) -> Result<Self> {
        info!("Loading configuration from {}", config_location);
        let config = provider
            .fetch_config(config_location)
            .await
            .context("Failed to load collection configuration")?;
        Ok(Self::from_config(config, source))
    }

    /// Seed a session from an already loaded configuration and start the
    /// first reload.
    pub fn from_config(config: CollectionConfig, source: Arc<dyn RecordSource>) -> Self {
        let mut session = Self {
            state: FilterState::default(),
            resource_path: String::new(),
            aggregator: CollectionAggregator::new(source, FilterEngine::new()),
            editor: RowEditor::new(),
        };
        session.apply_config(config);
        session
    }

    /// Replace categories, print qualities and resource path wholesale.
    ///
    /// The rest of the filter state starts over from its defaults.
    pub fn apply_config(&mut self, config: CollectionConfig) {
        info!(
            "Configuration: {} categories, {} print qualities, resources at {}",
            config.categories.len(),
            config.print_qualities.len(),
            config.resource_path
        );
        self.state = FilterState::from_config(&config);
        self.resource_path = config.resource_path;
        self.reload();
    }

    /// Discard the collection and fetch it again for the current state.
    pub fn reload(&mut self) -> usize {
        self.editor.cancel();
        self.aggregator.reload(&self.state, &self.resource_path)
    }

    // ------------------------------------------------------------------------
    // Filter state mutations
    // ------------------------------------------------------------------------

    /// Flip one category. Selecting it turns the "all categories" switch off.
    pub fn toggle_category(&mut self, name: &str) -> Result<bool> {
        let Some(selected) = self.state.toggle_category(name) else {
            bail!("Unknown category: {name}");
        };
        self.reload();
        Ok(selected)
    }

    /// Set the "all categories" switch.
    pub fn toggle_all_categories(&mut self, selected: bool) {
        self.state.set_all_categories(selected);
        self.reload();
    }

    /// Set every individual category flag to `selected`.
    pub fn reset_all_categories(&mut self, selected: bool) {
        self.state.reset_all_categories(selected);
        self.reload();
    }

    pub fn toggle_hindi_only(&mut self) -> bool {
        let hindi_only = self.state.toggle_hindi_only();
        self.reload();
        hindi_only
    }

    pub fn set_hindi_only(&mut self, hindi_only: bool) {
        self.state.hindi_only = hindi_only;
        self.reload();
    }

    /// Show exactly the named categories and print qualities.
    ///
    /// An empty `categories` turns the "all categories" switch back on; an
    /// empty `qualities` leaves no quality filter. Flags from the
    /// configuration are overwritten, not flipped, and a name given twice
    /// stays selected. Unknown names fail before anything changes. Reloads
    /// once.
    pub fn show_only(&mut self, categories: &[String], qualities: &[String]) -> Result<usize> {
        if let Some(name) = categories
            .iter()
            .find(|name| !self.state.categories.iter().any(|c| &c.name == *name))
        {
            bail!("Unknown category: {name}");
        }
        if let Some(name) = qualities
            .iter()
            .find(|name| !self.state.print_qualities.iter().any(|q| &q.name == *name))
        {
            bail!("Unknown print quality: {name}");
        }

        self.state.reset_all_categories(false);
        self.state.set_all_categories(categories.is_empty());
        for name in categories {
            self.state.select_category(name, true);
        }
        self.state.clear_print_qualities();
        for name in qualities {
            self.state.select_print_quality(name, true);
        }
        Ok(self.reload())
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.state.set_language(language);
        self.reload();
    }

    pub fn toggle_print_quality(&mut self, name: &str) -> Result<bool> {
        let Some(selected) = self.state.toggle_print_quality(name) else {
            bail!("Unknown print quality: {name}");
        };
        self.reload();
        Ok(selected)
    }

    // ------------------------------------------------------------------------
    // Reload progress
    // ------------------------------------------------------------------------

    pub async fn next_arrival(&mut self) -> Option<BatchOutcome> {
        self.aggregator.next_arrival().await
    }

    pub async fn settle(&mut self) -> Vec<BatchOutcome> {
        self.aggregator.settle().await
    }

    pub fn phase(&self) -> ReloadPhase {
        self.aggregator.phase()
    }

    pub fn movies(&self) -> &[Movie] {
        self.aggregator.collection()
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn resource_path(&self) -> &str {
        &self.resource_path
    }

    // ------------------------------------------------------------------------
    // Row editing
    // ------------------------------------------------------------------------

    pub fn begin_add(&mut self) {
        self.editor.begin_add();
    }

    /// Select a row for editing; the draft is a copy of it.
    pub fn select_row(&mut self, index: usize) -> Result<(), EditError> {
        self.editor.begin_edit(self.aggregator.collection(), index)
    }

    pub fn draft(&self) -> Option<&Movie> {
        self.editor.draft()
    }

    pub fn draft_mut(&mut self) -> Option<&mut Movie> {
        self.editor.draft_mut()
    }

    pub fn save_draft(&mut self) -> Result<DraftTarget, EditError> {
        self.editor.save(self.aggregator.collection_mut())
    }

    pub fn delete_selected(&mut self) -> Result<Movie, EditError> {
        self.editor.delete(self.aggregator.collection_mut())
    }

    pub fn cancel_edit(&mut self) {
        self.editor.cancel();
    }
}
