//! Parsers for the JSON documents the shelf reads.
//!
//! - the collection configuration: `{ categories, printQualities, resourcePath }`
//! - category files: a JSON array of movie records, one file per
//!   `(language, category)` pair at `{resourcePath}{language}/{category}.json`

use crate::error::{DataLoadError, Result};
use crate::types::{CollectionConfig, Movie};
use std::io;

/// Build the location of the records for one language and category.
///
/// The resource path is used as a prefix verbatim, so it normally ends with
/// a `/`. Language and category become path segments and must not be empty
/// or contain separators.
pub fn record_location(resource_path: &str, language: &str, category: &str) -> Result<String> {
    check_segment("language", language)?;
    check_segment("category", category)?;
    Ok(format!("{resource_path}{language}/{category}.json"))
}

fn check_segment(field: &str, value: &str) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == "." || trimmed == ".." || value.contains(['/', '\\']) {
        return Err(DataLoadError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Parse the collection configuration document.
pub fn parse_config(text: &str, location: &str) -> Result<CollectionConfig> {
    serde_json::from_str(text).map_err(|source| DataLoadError::ParseError {
        location: location.to_string(),
        source,
    })
}

/// Parse a category file into its records, keeping file order.
pub fn parse_records(text: &str, location: &str) -> Result<Vec<Movie>> {
    serde_json::from_str(text).map_err(|source| DataLoadError::ParseError {
        location: location.to_string(),
        source,
    })
}

/// Convert an I/O error for `location`, turning "not found" into
/// [`DataLoadError::FileNotFound`].
pub fn io_error(err: io::Error, location: &str) -> DataLoadError {
    if err.kind() == io::ErrorKind::NotFound {
        DataLoadError::FileNotFound {
            path: location.to_string(),
        }
    } else {
        DataLoadError::IoError(err)
    }
}
