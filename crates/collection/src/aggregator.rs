//! # Collection Aggregator
//!
//! This module builds the displayed collection for a filter state:
//! 1. Clear the collection and start a new reload generation
//! 2. Issue one fetch per active category, all at once
//! 3. As each fetch completes (in whatever order), filter its batch
//! 4. Append the surviving records to the collection
//!
//! ## Concurrency
//!
//! Fetches are polled together from the caller's task; nothing runs in
//! parallel and only the completion handler writes to the collection.
//! Batches from different categories land in arrival order, not in the order
//! the categories are declared. A fetch left over from an earlier reload is
//! not cancelled, but its batch is discarded when it arrives.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use futures_util::future::BoxFuture;
use futures_util::stream::{FuturesUnordered, StreamExt};
use tracing::{debug, info, warn};

use data_loader::Movie;
use pipeline::{FilterEngine, FilterState};
use sources::RecordSource;

/// Where the current reload stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadPhase {
    Idle,
    Fetching { pending: usize },
}

/// What happened to one completed fetch.
#[derive(Debug)]
pub enum BatchOutcome {
    /// `count` records passed the filters and were appended.
    Appended { category: String, count: usize },
    /// Nothing passed; the collection was left as it was.
    Empty { category: String },
    /// The fetch failed; the category contributes nothing this reload.
    Failed { category: String, error: anyhow::Error },
    /// The fetch belonged to an earlier reload and was dropped.
    Stale { category: String, generation: u64 },
}

impl BatchOutcome {
    pub fn category(&self) -> &str {
        match self {
            BatchOutcome::Appended { category, .. }
            | BatchOutcome::Empty { category }
            | BatchOutcome::Failed { category, .. }
            | BatchOutcome::Stale { category, .. } => category,
        }
    }
}

/// A finished fetch, tagged with the reload that issued it.
struct Arrival {
    generation: u64,
    category: String,
    result: Result<Vec<Movie>>,
}

/// Fetches, filters and merges category batches into one collection.
pub struct CollectionAggregator {
    source: Arc<dyn RecordSource>,
    engine: FilterEngine,
    collection: Vec<Movie>,
    generation: u64,
    pending: usize,
    state: FilterState,
    started_at: Option<Instant>,
    in_flight: FuturesUnordered<BoxFuture<'static, Arrival>>,
}

impl CollectionAggregator {
    pub fn new(source: Arc<dyn RecordSource>, engine: FilterEngine) -> Self {
        Self {
            source,
            engine,
            collection: Vec::new(),
            generation: 0,
            pending: 0,
            state: FilterState::default(),
            started_at: None,
            in_flight: FuturesUnordered::new(),
        }
    }

    /// Start rebuilding the collection for `state`.
    ///
    /// The collection is emptied immediately and one fetch is issued per
    /// active category. Returns the number of fetches issued. Batches are
    /// applied by [`next_arrival`](Self::next_arrival) or
    /// [`settle`](Self::settle).
    pub fn reload(&mut self, state: &FilterState, resource_path: &str) -> usize {
        self.generation += 1;
        self.collection.clear();
        self.state = state.clone();
        self.started_at = Some(Instant::now());

        let categories: Vec<String> = self
            .engine
            .active_categories(state)
            .into_iter()
            .map(|category| category.name.clone())
            .collect();

        for category in &categories {
            let source = Arc::clone(&self.source);
            let resource_path = resource_path.to_string();
            let language = state.language.clone();
            let category = category.clone();
            let generation = self.generation;

            self.in_flight.push(Box::pin(async move {
                let result = source
                    .fetch_records(&resource_path, &language, &category)
                    .await;
                Arrival {
                    generation,
                    category,
                    result,
                }
            }));
        }

        self.pending = categories.len();
        info!(
            "Reload {} started: language={}, categories=[{}]",
            self.generation,
            state.language,
            categories.join(", ")
        );
        self.pending
    }

    /// Wait for the next fetch to complete and apply it.
    ///
    /// Returns `None` when no fetch is outstanding, including stale ones.
    pub async fn next_arrival(&mut self) -> Option<BatchOutcome> {
        let arrival = self.in_flight.next().await?;
        Some(self.complete(arrival))
    }

    /// Apply completions until every fetch of the current reload is in.
    ///
    /// Stale completions seen on the way are applied (that is, dropped) too.
    /// A fetch that never completes keeps this from returning.
    pub async fn settle(&mut self) -> Vec<BatchOutcome> {
        let mut outcomes = Vec::new();
        while self.pending > 0 {
            match self.next_arrival().await {
                Some(outcome) => outcomes.push(outcome),
                None => break,
            }
        }
        if let Some(started_at) = self.started_at.take() {
            info!(
                "Reload {} settled with {} movies in {:.2?}",
                self.generation,
                self.collection.len(),
                started_at.elapsed()
            );
        }
        outcomes
    }

    fn complete(&mut self, arrival: Arrival) -> BatchOutcome {
        let Arrival {
            generation,
            category,
            result,
        } = arrival;

        if generation != self.generation {
            debug!(
                "Dropping {} batch from reload {} (current reload {})",
                category, generation, self.generation
            );
            return BatchOutcome::Stale {
                category,
                generation,
            };
        }
        self.pending = self.pending.saturating_sub(1);

        let movies = match result {
            Ok(movies) => movies,
            Err(error) => {
                warn!("Fetching {} failed: {:#}", category, error);
                return BatchOutcome::Failed { category, error };
            }
        };

        let received = movies.len();
        let kept = self.engine.filter_batch(movies, &self.state);
        debug!(
            "Batch {}: received={}, kept={}, pending={}",
            category,
            received,
            kept.len(),
            self.pending
        );

        if kept.is_empty() {
            return BatchOutcome::Empty { category };
        }

        let count = kept.len();
        self.collection.extend(kept);
        BatchOutcome::Appended { category, count }
    }

    /// The records collected so far for the current reload.
    pub fn collection(&self) -> &[Movie] {
        &self.collection
    }

    pub(crate) fn collection_mut(&mut self) -> &mut Vec<Movie> {
        &mut self.collection
    }

    pub fn phase(&self) -> ReloadPhase {
        match self.pending {
            0 => ReloadPhase::Idle,
            pending => ReloadPhase::Fetching { pending },
        }
    }

    /// Number of the current reload; 0 before the first one.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Fetches still running, counting those of earlier reloads.
    pub fn outstanding(&self) -> usize {
        self.in_flight.len()
    }
}

impl std::fmt::Debug for CollectionAggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionAggregator")
            .field("generation", &self.generation)
            .field("pending", &self.pending)
            .field("collected", &self.collection.len())
            .field("outstanding", &self.in_flight.len())
            .finish()
    }
}
