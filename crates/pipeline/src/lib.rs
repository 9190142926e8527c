//! Filtering of movie records for the shelf.
//!
//! This crate provides:
//! - FilterState, the user's current selection and its toggle operations
//! - Filter trait and implementations (Hindi only, print quality)
//! - FilterPipeline for composing filters
//! - FilterEngine, which decides inclusion of records and categories
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterEngine, FilterState};
//!
//! let mut state = FilterState::from_config(&config);
//! state.toggle_print_quality("HD");
//!
//! let engine = FilterEngine::new();
//! for category in engine.active_categories(&state) {
//!     let batch = fetch(&category.name).await?;
//!     let kept = engine.filter_batch(batch, &state);
//! }
//! ```

pub mod engine;
pub mod filter_pipeline;
pub mod filters;
pub mod state;
pub mod traits;

// Re-export main types
pub use engine::FilterEngine;
pub use filter_pipeline::FilterPipeline;
pub use filters::{passes_quality_filter, QualityMatch};
pub use state::{FilterState, DEFAULT_LANGUAGE};
pub use traits::Filter;
