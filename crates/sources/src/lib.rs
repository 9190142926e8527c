//! # Sources Crate
//!
//! This crate implements where the shelf's data comes from.
//!
//! ## Components
//!
//! ### ConfigProvider
//! Supplies the collection configuration: the known categories, the print
//! quality options and the resource path category files live under.
//!
//! ### RecordSource
//! Supplies the movie records of one category in one language, read from
//! `{resourcePath}{language}/{category}.json`.
//!
//! Both are implemented by:
//! - [`FileSource`]: documents on the local filesystem (tokio::fs)
//! - [`HttpSource`]: documents served over HTTP (reqwest)
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{ConfigProvider, FileSource, RecordSource};
//!
//! let source = FileSource::new("site");
//! let config = source.fetch_config("app/resources/config.json").await?;
//! let movies = source
//!     .fetch_records(&config.resource_path, "English", "Action")
//!     .await?;
//! ```

// Public modules
pub mod file;
pub mod http;
pub mod traits;

// Re-export commonly used types
pub use file::FileSource;
pub use http::HttpSource;
pub use traits::{ConfigProvider, RecordSource};

/// True if `location` is an absolute http(s) URL.
pub fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}
