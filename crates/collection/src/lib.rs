//! Collection crate for the movie shelf.
//!
//! This crate turns a filter state into the displayed collection and
//! exposes the operations the presentation layer drives it with.
//!
//! - [`CollectionAggregator`]: one fetch per active category, filtered and
//!   merged in arrival order
//! - [`ShelfSession`]: filter state mutations, each followed by a reload,
//!   plus staging of row edits

pub mod aggregator;
pub mod editor;
pub mod session;

pub use aggregator::{BatchOutcome, CollectionAggregator, ReloadPhase};
pub use editor::{DraftTarget, EditError, RowEditor};
pub use session::ShelfSession;
