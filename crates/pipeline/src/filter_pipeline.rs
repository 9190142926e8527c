//! The FilterPipeline chains multiple filters.
//!
//! This module provides the FilterPipeline struct that composes
//! filters using the builder pattern.

use crate::state::FilterState;
use crate::traits::Filter;
use data_loader::Movie;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(HindiOnlyFilter)
///     .add_filter(PrintQualityFilter);
///
/// let kept = pipeline.apply(movies, &state);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// True when a single record passes every filter.
    pub fn includes(&self, movie: &Movie, state: &FilterState) -> bool {
        self.filters.iter().all(|filter| filter.matches(movie, state))
    }

    /// Apply all filters in sequence to a batch.
    ///
    /// Record order is preserved through every stage.
    pub fn apply(&self, movies: Vec<Movie>, state: &FilterState) -> Vec<Movie> {
        let mut current = movies;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, state);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }

    /// Names of the filters, in the order they run.
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
