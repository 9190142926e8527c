//! Filter for the "Hindi only" switch.

use crate::state::FilterState;
use crate::traits::Filter;
use data_loader::Movie;

/// Removes records not flagged `isHindi` while the switch is on.
///
/// A record with no `isHindi` field counts as not Hindi. With the switch off
/// every record passes.
pub struct HindiOnlyFilter;

impl Filter for HindiOnlyFilter {
    fn name(&self) -> &str {
        "HindiOnlyFilter"
    }

    fn matches(&self, movie: &Movie, state: &FilterState) -> bool {
        !state.hindi_only || movie.is_hindi()
    }
}
