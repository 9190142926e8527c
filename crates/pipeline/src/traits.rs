//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to batches of movie records.

use crate::state::FilterState;
use data_loader::Movie;

/// Core trait for filtering movie records.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared with fetch tasks
/// - `matches` decides a single record; `apply` takes ownership of a batch
///   and keeps the records that match, in their original order
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Decide whether one record passes this filter under `state`.
    fn matches(&self, movie: &Movie, state: &FilterState) -> bool;

    /// Apply this filter to a batch of records.
    fn apply(&self, movies: Vec<Movie>, state: &FilterState) -> Vec<Movie> {
        movies
            .into_iter()
            .filter(|movie| self.matches(movie, state))
            .collect()
    }
}
