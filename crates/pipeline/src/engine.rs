//! The filter engine: the single place that decides whether a record or a
//! category belongs in the displayed collection.

use std::sync::Arc;

use data_loader::{Category, Movie};

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{HindiOnlyFilter, PrintQualityFilter};
use crate::state::FilterState;

/// Decides inclusion of records and categories for a [`FilterState`].
///
/// Cheap to clone; clones share the same pipeline.
#[derive(Clone)]
pub struct FilterEngine {
    pipeline: Arc<FilterPipeline>,
}

impl FilterEngine {
    /// Engine with the standard filters: Hindi-only, then print quality.
    pub fn new() -> Self {
        Self::with_pipeline(
            FilterPipeline::new()
                .add_filter(HindiOnlyFilter)
                .add_filter(PrintQualityFilter),
        )
    }

    pub fn with_pipeline(pipeline: FilterPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }

    /// True if `movie` belongs in the collection under `state`.
    ///
    /// With Hindi-only on, the record must be flagged Hindi. In every case its
    /// print quality must not be rejected; an inactive quality filter passes.
    pub fn is_included(&self, movie: &Movie, state: &FilterState) -> bool {
        self.pipeline.includes(movie, state)
    }

    /// True if records of `category` should be fetched under `state`.
    ///
    /// The "all categories" switch wins over the category's own flag.
    pub fn is_category_active(&self, category: &Category, state: &FilterState) -> bool {
        state.all_categories_selected || category.is_selected
    }

    /// Categories to fetch under `state`, in declaration order.
    pub fn active_categories<'a>(&self, state: &'a FilterState) -> Vec<&'a Category> {
        state
            .categories
            .iter()
            .filter(|category| self.is_category_active(category, state))
            .collect()
    }

    /// Keep the records of one fetched batch that pass, preserving order.
    pub fn filter_batch(&self, movies: Vec<Movie>, state: &FilterState) -> Vec<Movie> {
        self.pipeline.apply(movies, state)
    }
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FilterEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterEngine")
            .field("filters", &self.pipeline.filter_names())
            .finish()
    }
}
