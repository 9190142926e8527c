//! The user's current filter selection.
//!
//! One `FilterState` exists per session. It is seeded from the collection
//! configuration and changed only through the toggle methods below, each of
//! which leaves the state consistent on its own.

use data_loader::{Category, CollectionConfig, PrintQuality, Selectable};

/// Language shown before the user picks one.
pub const DEFAULT_LANGUAGE: &str = "English";

/// Current filter selection.
///
/// ## Invariant
/// When `all_categories_selected` is true every category counts as active
/// whatever its own flag says. Selecting a single category clears
/// `all_categories_selected`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub hindi_only: bool,
    pub categories: Vec<Category>,
    pub print_qualities: Vec<PrintQuality>,
    pub language: String,
    pub all_categories_selected: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            hindi_only: false,
            categories: Vec::new(),
            print_qualities: Vec::new(),
            language: DEFAULT_LANGUAGE.to_string(),
            all_categories_selected: true,
        }
    }
}

impl FilterState {
    /// Seed a fresh state with the categories and print qualities of a
    /// configuration. Everything else starts at its default.
    pub fn from_config(config: &CollectionConfig) -> Self {
        Self {
            categories: config.categories.clone(),
            print_qualities: config.print_qualities.clone(),
            ..Self::default()
        }
    }

    /// Flip the named category.
    ///
    /// Returns the new flag, or `None` if no category has that name.
    pub fn toggle_category(&mut self, name: &str) -> Option<bool> {
        let selected = toggle_named(&mut self.categories, name)?;
        if selected && self.all_categories_selected {
            self.all_categories_selected = false;
        }
        Some(selected)
    }

    /// Set the named category's flag to `selected`.
    ///
    /// Returns the flag, or `None` if no category has that name. Selecting
    /// clears the "all categories" switch the same way toggling on does.
    pub fn select_category(&mut self, name: &str, selected: bool) -> Option<bool> {
        set_named(&mut self.categories, name, selected)?;
        if selected {
            self.all_categories_selected = false;
        }
        Some(selected)
    }

    /// Set the "all categories" switch without touching individual flags.
    pub fn set_all_categories(&mut self, selected: bool) {
        self.all_categories_selected = selected;
    }

    /// Set every individual category flag to `selected`.
    pub fn reset_all_categories(&mut self, selected: bool) {
        for category in &mut self.categories {
            category.set_selected(selected);
        }
    }

    /// Flip the Hindi-only switch and return its new value.
    pub fn toggle_hindi_only(&mut self) -> bool {
        self.hindi_only = !self.hindi_only;
        self.hindi_only
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    /// Flip the named print quality.
    ///
    /// Returns the new flag, or `None` if no quality has that name.
    pub fn toggle_print_quality(&mut self, name: &str) -> Option<bool> {
        toggle_named(&mut self.print_qualities, name)
    }

    /// Set the named print quality's flag to `selected`.
    pub fn select_print_quality(&mut self, name: &str, selected: bool) -> Option<bool> {
        set_named(&mut self.print_qualities, name, selected).map(|()| selected)
    }

    /// Untick every print quality, so no quality filter is active.
    pub fn clear_print_qualities(&mut self) {
        for quality in &mut self.print_qualities {
            quality.set_selected(false);
        }
    }

    /// True when at least one print quality is ticked.
    pub fn has_quality_filter(&self) -> bool {
        self.print_qualities.iter().any(|quality| quality.is_selected)
    }
}

fn toggle_named<T: Selectable>(options: &mut [T], name: &str) -> Option<bool> {
    options
        .iter_mut()
        .find(|option| option.name() == name)
        .map(|option| option.toggle())
}

fn set_named<T: Selectable>(options: &mut [T], name: &str, selected: bool) -> Option<()> {
    options
        .iter_mut()
        .find(|option| option.name() == name)
        .map(|option| option.set_selected(selected))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> CollectionConfig {
        CollectionConfig {
            categories: vec![
                Category::new("Action", false),
                Category::new("Drama", false),
            ],
            print_qualities: vec![
                PrintQuality::new("HD", false),
                PrintQuality::new("SD", false),
            ],
            resource_path: "movies/".to_string(),
        }
    }

    #[test]
    fn test_defaults() {
        let state = FilterState::from_config(&test_config());
        assert!(!state.hindi_only);
        assert!(state.all_categories_selected);
        assert_eq!(state.language, "English");
        assert_eq!(state.categories.len(), 2);
        assert!(!state.has_quality_filter());
    }

    #[test]
    fn test_selecting_category_clears_all_selected() {
        let mut state = FilterState::from_config(&test_config());

        assert_eq!(state.toggle_category("Drama"), Some(true));
        assert!(!state.all_categories_selected);
        assert!(state.categories[1].is_selected);
    }

    #[test]
    fn test_deselecting_category_keeps_all_flag() {
        let mut state = FilterState::from_config(&test_config());
        state.categories[0].is_selected = true;

        assert_eq!(state.toggle_category("Action"), Some(false));
        assert!(state.all_categories_selected);
    }

    #[test]
    fn test_toggle_unknown_names() {
        let mut state = FilterState::from_config(&test_config());
        let before = state.clone();

        assert_eq!(state.toggle_category("Horror"), None);
        assert_eq!(state.toggle_print_quality("4K"), None);
        assert_eq!(state, before);
    }

    #[test]
    fn test_reset_all_categories() {
        let mut state = FilterState::from_config(&test_config());

        state.reset_all_categories(true);
        assert!(state.categories.iter().all(|c| c.is_selected));

        state.reset_all_categories(false);
        assert!(state.categories.iter().all(|c| !c.is_selected));
        // The switch itself is independent of the flags
        assert!(state.all_categories_selected);
    }

    #[test]
    fn test_hindi_language_and_quality_toggles() {
        let mut state = FilterState::default();
        assert!(state.toggle_hindi_only());
        assert!(!state.toggle_hindi_only());

        state.set_language("Hindi");
        assert_eq!(state.language, "Hindi");

        let mut state = FilterState::from_config(&test_config());
        assert_eq!(state.toggle_print_quality("HD"), Some(true));
        assert!(state.has_quality_filter());
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut state = FilterState::from_config(&test_config());

        assert_eq!(state.select_category("Drama", true), Some(true));
        assert_eq!(state.select_category("Drama", true), Some(true));
        assert!(state.categories[1].is_selected);
        assert!(!state.all_categories_selected);

        assert_eq!(state.select_print_quality("SD", true), Some(true));
        assert_eq!(state.select_print_quality("SD", true), Some(true));
        assert!(state.print_qualities[1].is_selected);

        assert_eq!(state.select_category("Horror", true), None);
        assert_eq!(state.select_print_quality("4K", true), None);
    }

    #[test]
    fn test_select_overrides_preselected_flags() {
        let mut config = test_config();
        config.categories[1].is_selected = true;
        config.print_qualities[0].is_selected = true;
        let mut state = FilterState::from_config(&config);

        // Toggling a preselected option turns it off
        assert_eq!(state.clone().toggle_category("Drama"), Some(false));

        assert_eq!(state.select_category("Drama", true), Some(true));
        assert!(state.categories[1].is_selected);

        state.clear_print_qualities();
        assert!(!state.has_quality_filter());
        assert_eq!(state.select_print_quality("HD", true), Some(true));
        assert!(state.print_qualities[0].is_selected);
        assert!(!state.print_qualities[1].is_selected);
    }
}
