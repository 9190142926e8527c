//! Filter on the print quality of a record.
//!
//! The rule is deliberately lenient: when no quality is ticked the filter is
//! off and every record passes, whatever its quality.

use crate::state::FilterState;
use crate::traits::Filter;
use data_loader::{Movie, PrintQuality};

/// Outcome of checking one record against the print quality options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityMatch {
    /// A ticked quality equals the record's quality.
    Match,
    /// Some quality is ticked, none equals the record's quality.
    NoMatch,
    /// No quality is ticked at all.
    NoFilterActive,
}

impl QualityMatch {
    /// `Match` and `NoFilterActive` both let the record through.
    pub fn passes(self) -> bool {
        !matches!(self, QualityMatch::NoMatch)
    }
}

/// Check `movie` against the print quality options.
///
/// ## Algorithm
/// 1. Walk every option, remembering whether any is ticked
/// 2. A ticked option named exactly like `movie.print_quality` is a `Match`
/// 3. Otherwise `NoMatch` if something was ticked, `NoFilterActive` if not
///
/// A record without a print quality never matches a ticked option.
pub fn passes_quality_filter(movie: &Movie, print_qualities: &[PrintQuality]) -> QualityMatch {
    let mut filter_applied = false;
    for quality in print_qualities {
        if quality.is_selected {
            filter_applied = true;
            if movie.print_quality.as_deref() == Some(quality.name.as_str()) {
                return QualityMatch::Match;
            }
        }
    }

    if filter_applied {
        QualityMatch::NoMatch
    } else {
        QualityMatch::NoFilterActive
    }
}

/// Removes records whose print quality is not among the ticked ones.
pub struct PrintQualityFilter;

impl Filter for PrintQualityFilter {
    fn name(&self) -> &str {
        "PrintQualityFilter"
    }

    fn matches(&self, movie: &Movie, state: &FilterState) -> bool {
        passes_quality_filter(movie, &state.print_qualities).passes()
    }
}
