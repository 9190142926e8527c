//! Core domain types for the movie shelf.
//!
//! This module defines the records read from the per-category JSON files and
//! the selectable filter options read from the collection configuration.
//! Key Rust concepts demonstrated here:
//! - `Option<T>` for fields that may be missing from a record
//! - serde attributes for camelCase JSON and lenient field parsing
//! - A small trait shared by the two kinds of selectable options

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

// =============================================================================
// Movie Record
// =============================================================================

/// A single movie record as stored in a category file.
///
/// Every field is optional: category files are hand-maintained and a record
/// with only a name is still a valid row.
///
/// Rust concept: `#[derive(Default)]` gives us an "empty movie" for free,
/// which is what a new row in the editor starts from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[serde(default)]
    pub name: Option<String>,

    /// Release year. Accepts `1999` or `"1999"`; an empty string is absent.
    #[serde(default, deserialize_with = "deserialize_year")]
    pub year: Option<u16>,

    /// Print quality tag, e.g. "HD" or "SD"
    #[serde(default)]
    pub print_quality: Option<String>,

    #[serde(default)]
    pub file_name: Option<String>,

    #[serde(default)]
    pub series_name: Option<String>,

    /// Hindi flag. Truthy values count: `true`, a non-zero number or a
    /// non-empty string; `false`, `0` and `""` do not.
    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub is_hindi: Option<bool>,
}

impl Movie {
    /// Create a record with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// True only when the record is explicitly flagged as Hindi.
    pub fn is_hindi(&self) -> bool {
        self.is_hindi.unwrap_or(false)
    }
}

/// Deserialize a year given either as a JSON number or a numeric string.
fn deserialize_year<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawYear {
        Number(u16),
        Text(String),
    }

    match Option::<RawYear>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawYear::Number(year)) => Ok(Some(year)),
        Some(RawYear::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse::<u16>()
                .map(Some)
                .map_err(|_| de::Error::custom(format!("invalid year: {text:?}")))
        }
    }
}

/// Deserialize a flag that may be stored as a bool, a number or a string.
fn deserialize_truthy<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawFlag {
        Bool(bool),
        Number(f64),
        Text(String),
    }

    Ok(Option::<RawFlag>::deserialize(deserializer)?.map(|raw| match raw {
        RawFlag::Bool(flag) => flag,
        RawFlag::Number(number) => number != 0.0 && !number.is_nan(),
        RawFlag::Text(text) => !text.is_empty(),
    }))
}

// =============================================================================
// Selectable Filter Options
// =============================================================================

/// Shared behaviour of options the user can tick on and off.
///
/// Rust concept: a trait lets the filter state toggle categories and print
/// qualities with one generic helper instead of two copies.
pub trait Selectable {
    fn name(&self) -> &str;
    fn is_selected(&self) -> bool;
    fn set_selected(&mut self, selected: bool);

    /// Flip the flag and return the new value.
    fn toggle(&mut self) -> bool {
        let selected = !self.is_selected();
        self.set_selected(selected);
        selected
    }
}

/// A named grouping of movies with its own data file per language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub is_selected: bool,
}

impl Category {
    pub fn new(name: impl Into<String>, is_selected: bool) -> Self {
        Self {
            name: name.into(),
            is_selected,
        }
    }
}

impl Selectable for Category {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_selected(&self) -> bool {
        self.is_selected
    }

    fn set_selected(&mut self, selected: bool) {
        self.is_selected = selected;
    }
}

/// A print quality tag the collection can be filtered by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintQuality {
    pub name: String,
    #[serde(default)]
    pub is_selected: bool,
}

impl PrintQuality {
    pub fn new(name: impl Into<String>, is_selected: bool) -> Self {
        Self {
            name: name.into(),
            is_selected,
        }
    }
}

impl Selectable for PrintQuality {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_selected(&self) -> bool {
        self.is_selected
    }

    fn set_selected(&mut self, selected: bool) {
        self.is_selected = selected;
    }
}

// =============================================================================
// Collection Configuration
// =============================================================================

/// The collection configuration document.
///
/// ```json
/// {
///   "resourcePath": "app/resources/movies/",
///   "categories": [{ "name": "Action", "isSelected": false }],
///   "printQualities": [{ "name": "HD", "isSelected": false }]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionConfig {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub print_qualities: Vec<PrintQuality>,
    pub resource_path: String,
}
