//! Filter implementations for the record pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod hindi_only;
pub mod print_quality;

// Re-export for convenience
pub use hindi_only::HindiOnlyFilter;
pub use print_quality::{passes_quality_filter, PrintQualityFilter, QualityMatch};
