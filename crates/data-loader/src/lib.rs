//! # Data Loader Crate
//!
//! This crate defines the movie shelf's data model and parses the JSON
//! documents it is built from.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Category, PrintQuality, CollectionConfig)
//! - **parser**: Parse configuration and category files, build record locations
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::parser::{parse_config, parse_records, record_location};
//!
//! let config = parse_config(&config_text, "app/resources/config.json")?;
//! let location = record_location(&config.resource_path, "English", "Action")?;
//! let movies = parse_records(&records_text, &location)?;
//!
//! println!("{} has {} movies", location, movies.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{
    Category,
    CollectionConfig,
    Movie,
    PrintQuality,
    Selectable,
};
